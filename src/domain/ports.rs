use crate::domain::model::{Direction, OutputFormat};

pub trait ConfigProvider: Send + Sync {
    fn direction(&self) -> Direction;
    fn output_format(&self) -> OutputFormat;
    fn fail_fast(&self) -> bool;
}
