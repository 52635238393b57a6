pub mod hooks;
pub mod run;
