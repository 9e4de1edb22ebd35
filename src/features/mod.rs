pub mod notify;
pub mod outputs;

pub use notify::notify;
pub use outputs::write_outputs;
