pub mod config;
pub mod sinks;
pub mod survey;

// Desktop shell; the survey core builds without it.
#[cfg(feature = "desktop")]
mod desktop;

#[cfg(feature = "desktop")]
pub use desktop::run;
