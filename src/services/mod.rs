mod director;
mod sedan_production_line;

pub use director::Director;
pub use sedan_production_line::SedanProductionLine;
