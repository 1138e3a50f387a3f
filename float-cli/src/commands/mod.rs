pub mod features;
pub mod new;
