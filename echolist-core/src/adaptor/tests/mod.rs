/*
    tests - Adaptor behavior suites
*/

pub mod convergence_tests;
