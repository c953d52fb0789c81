pub mod layout;
pub mod scaffold;

// Re-export commonly used items
pub use scaffold::init_project;
