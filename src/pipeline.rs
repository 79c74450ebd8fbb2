use std::io::Write;

use crate::config::EncodeConfig;
use crate::encode_gif::GifAssembler;
use crate::error::{SortreelError, SortreelResult};
use crate::palette::Cell;
use crate::render_grid::{CELL_PX, render_indexed};
use crate::step::{StepOutcome, Stepper};

/// Options for [`run_animation`].
#[derive(Clone, Copy, Debug)]
pub struct AnimationOpts {
    pub encode: EncodeConfig,
    /// Pixel size of one cell square, border included.
    pub scale: usize,
}

impl Default for AnimationOpts {
    fn default() -> Self {
        Self {
            encode: EncodeConfig::default(),
            scale: CELL_PX,
        }
    }
}

/// Run the full step/render/assemble loop and write the finished GIF to
/// `sink`. Returns the number of frames written.
///
/// Step 0 renders the untouched input; every later productive step appends
/// one snapshot to the history, composites one frame from it and encodes
/// it. The loop stops at the stepper's termination signal (whose call
/// produces no frame) or after one step per array position, whichever comes
/// first, so the frame count is the number of productive steps plus the
/// initial frame.
#[tracing::instrument(skip(array, stepper, sink), fields(len = array.len()))]
pub fn run_animation<W: Write>(
    mut array: Vec<Cell>,
    stepper: &mut dyn Stepper,
    opts: &AnimationOpts,
    sink: W,
) -> SortreelResult<u64> {
    if array.is_empty() {
        return Err(SortreelError::validation("animation array must be non-empty"));
    }
    if opts.scale == 0 {
        return Err(SortreelError::validation("cell scale must be non-zero"));
    }

    let n = array.len();
    let side = (n * opts.scale) as u32;
    let mut assembler = GifAssembler::new(sink, opts.encode)?;
    let mut history: Vec<Vec<Cell>> = Vec::with_capacity(n);

    for i in 0..n {
        match stepper.step(i, &mut array) {
            StepOutcome::Done => break,
            StepOutcome::Advanced { settled } => {
                history.push(array.clone());
                let indexed = render_indexed(&history, i, settled, opts.scale);
                assembler.push_indexed(&indexed, side)?;
            }
        }
    }

    let frames = assembler.finish()?;
    tracing::debug!(frames, "animation encoded");
    Ok(frames)
}
