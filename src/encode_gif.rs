use std::cell::Cell as Flag;
use std::io::{self, Write};
use std::rc::Rc;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};

use crate::config::EncodeConfig;
use crate::error::{SortreelError, SortreelResult};
use crate::palette::{Cell, PALETTE_LEN};

/// Streams rendered frames into a GIF on any byte sink.
///
/// Frames are encoded as they arrive; the sink receives a complete,
/// decodable animation once [`finish`](Self::finish) returns. Write
/// failures surface on the call that hit them; there is no retry. The
/// trailer byte is emitted while the encoder drops, so the sink is wrapped
/// in a latch that records late write failures for `finish` to report —
/// either the stream is complete or the run errors, never a silent
/// truncation.
pub struct GifAssembler<W: Write> {
    encoder: GifEncoder<LatchedWriter<W>>,
    write_failed: Rc<Flag<bool>>,
    delay: Delay,
    frames: u64,
}

/// Records whether any write on the underlying sink failed, since the
/// encoder's drop path cannot return the error itself.
struct LatchedWriter<W: Write> {
    inner: W,
    failed: Rc<Flag<bool>>,
}

impl<W: Write> Write for LatchedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).inspect_err(|_| self.failed.set(true))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().inspect_err(|_| self.failed.set(true))
    }
}

impl<W: Write> GifAssembler<W> {
    pub fn new(sink: W, cfg: EncodeConfig) -> SortreelResult<Self> {
        let write_failed = Rc::new(Flag::new(false));
        let mut encoder = GifEncoder::new_with_speed(
            LatchedWriter {
                inner: sink,
                failed: Rc::clone(&write_failed),
            },
            10,
        );
        let repeat = if cfg.loop_count == 0 {
            Repeat::Infinite
        } else {
            Repeat::Finite(cfg.loop_count)
        };
        encoder
            .set_repeat(repeat)
            .map_err(|e| SortreelError::encode(format!("failed to set gif repeat: {e}")))?;

        Ok(Self {
            encoder,
            write_failed,
            delay: Delay::from_numer_denom_ms(u32::from(cfg.delay_cs) * 10, 1),
            frames: 0,
        })
    }

    /// Append one square frame of palette indices.
    pub fn push_indexed(&mut self, indexed: &[u8], side: u32) -> SortreelResult<()> {
        let image = expand_to_rgba(indexed, side)?;
        self.encoder
            .encode_frame(Frame::from_parts(image, 0, 0, self.delay))
            .map_err(|e| SortreelError::encode(format!("failed to encode gif frame: {e}")))?;
        self.frames += 1;
        Ok(())
    }

    /// Finish the stream and report how many frames were written. Fails if
    /// the trailer could not be written to the sink.
    pub fn finish(self) -> SortreelResult<u64> {
        let Self {
            encoder,
            write_failed,
            delay: _,
            frames,
        } = self;
        drop(encoder);

        if write_failed.get() {
            return Err(SortreelError::encode("failed to write gif trailer"));
        }
        Ok(frames)
    }
}

/// Expand palette indices to RGBA8 for the encoder.
fn expand_to_rgba(indexed: &[u8], side: u32) -> SortreelResult<RgbaImage> {
    let expected = (side as usize) * (side as usize);
    if indexed.len() != expected {
        return Err(SortreelError::validation(format!(
            "indexed frame has {} pixels, expected {side}x{side}",
            indexed.len()
        )));
    }

    let mut image = RgbaImage::new(side, side);
    for (pixel, &index) in image.pixels_mut().zip(indexed) {
        if index as usize >= PALETTE_LEN {
            return Err(SortreelError::validation(format!(
                "palette index {index} out of range"
            )));
        }
        let [r, g, b] = Cell(index).rgb();
        *pixel = Rgba([r, g, b, 255]);
    }
    Ok(image)
}
