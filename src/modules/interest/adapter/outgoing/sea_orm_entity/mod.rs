pub mod interests;
