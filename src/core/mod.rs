pub mod calc;
pub mod estimator;
pub mod history;
pub mod log;
pub mod session;
