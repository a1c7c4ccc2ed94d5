mod design;
pub use design::DesignCommand;

mod fill;
pub use fill::FillCommand;
