//! Property-based tests for the reducers and the evaluator.
