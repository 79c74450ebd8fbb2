#![forbid(unsafe_code)]

pub mod config;
pub mod encode_gif;
pub mod error;
pub mod palette;
pub mod partition;
pub mod pipeline;
pub mod render_grid;
pub mod sequence;
pub mod step;

pub use config::{EncodeConfig, RunSpec, parse_delay, parse_loop};
pub use encode_gif::GifAssembler;
pub use error::{SortreelError, SortreelResult};
pub use palette::Cell;
pub use partition::{Split, Strategy};
pub use pipeline::{AnimationOpts, run_animation};
pub use render_grid::{CELL_PX, GRID_CELLS, render_indexed};
pub use sequence::generate;
pub use step::{Algorithm, InsertionSort, QuickSort, StepOutcome, Stepper};
