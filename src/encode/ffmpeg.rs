use std::ffi::OsString;
use std::io::{Read as _, Write as _};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread::JoinHandle;

use crate::encode::png::ensure_parent_dir;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{HourwaveError, HourwaveResult};
use crate::foundation::math::mul_div255_u16;
use crate::render::backend::FrameRGBA;

/// Options for [`FfmpegSink`].
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    pub out_path: PathBuf,
    /// Pass `-y` instead of `-n`, and skip the pre-flight existence check.
    pub overwrite: bool,
    /// Straight-alpha color that translucent pixels are flattened onto.
    pub bg_rgba: [u8; 4],
}

impl FfmpegSinkOpts {
    /// Overwriting MP4 output on a white background.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            bg_rgba: [255, 255, 255, 255],
        }
    }
}

struct Encoder {
    child: Child,
    stdin: Option<ChildStdin>,
    stderr: Option<JoinHandle<std::io::Result<Vec<u8>>>>,
    cfg: SinkConfig,
}

impl Drop for Encoder {
    fn drop(&mut self) {
        drop(self.stdin.take());
        // Still running means `end` never waited on it.
        if let Ok(None) = self.child.try_wait() {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
        if let Some(handle) = self.stderr.take() {
            let _ = handle.join();
        }
    }
}

/// Streams opaque RGBA8 frames into a system `ffmpeg` process encoding H.264 MP4.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,
    encoder: Option<Encoder>,
    opaque: Vec<u8>,
    last_idx: Option<FrameIndex>,
}

impl FfmpegSink {
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            opaque: Vec::new(),
            last_idx: None,
        }
    }
}

impl std::fmt::Debug for FfmpegSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FfmpegSink")
            .field("opts", &self.opts)
            .field("running", &self.encoder.is_some())
            .finish_non_exhaustive()
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> HourwaveResult<()> {
        if self.encoder.is_some() {
            return Err(HourwaveError::encode("ffmpeg sink already started"));
        }
        check_yuv420_size(cfg)?;

        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(HourwaveError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(HourwaveError::encode(
                "MP4 output needs `ffmpeg` on PATH, and none was found",
            ));
        }

        let mut child = Command::new("ffmpeg")
            .args(ffmpeg_args(&self.opts, cfg))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| HourwaveError::encode(format!("spawn ffmpeg: {e}")))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| HourwaveError::encode("ffmpeg stdin was not captured"))?;
        let mut stderr_pipe = child
            .stderr
            .take()
            .ok_or_else(|| HourwaveError::encode("ffmpeg stderr was not captured"))?;
        // Drain stderr so a chatty encoder never blocks on a full pipe.
        let stderr = std::thread::spawn(move || {
            let mut buf = Vec::new();
            stderr_pipe.read_to_end(&mut buf)?;
            Ok(buf)
        });

        tracing::debug!(
            out = %self.opts.out_path.display(),
            width = cfg.width,
            height = cfg.height,
            fps = cfg.fps.as_f64(),
            "started ffmpeg"
        );

        self.opaque = vec![0u8; frame_len(cfg)];
        self.last_idx = None;
        self.encoder = Some(Encoder {
            child,
            stdin: Some(stdin),
            stderr: Some(stderr),
            cfg,
        });
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> HourwaveResult<()> {
        let enc = self
            .encoder
            .as_mut()
            .ok_or_else(|| HourwaveError::encode("ffmpeg sink not started"))?;
        if self.last_idx.is_some_and(|last| idx <= last) {
            return Err(HourwaveError::encode(format!(
                "ffmpeg sink got frame {} out of order",
                idx.0
            )));
        }
        if (frame.width, frame.height) != (enc.cfg.width, enc.cfg.height) {
            return Err(HourwaveError::validation(format!(
                "frame is {}x{}, sink expects {}x{}",
                frame.width, frame.height, enc.cfg.width, enc.cfg.height
            )));
        }

        if frame.premultiplied {
            flatten_onto_background(&mut self.opaque, &frame.data, self.opts.bg_rgba)?;
        } else {
            let premul = premultiply(&frame.data);
            flatten_onto_background(&mut self.opaque, &premul, self.opts.bg_rgba)?;
        }

        let stdin = enc
            .stdin
            .as_mut()
            .ok_or_else(|| HourwaveError::encode("ffmpeg stdin already closed"))?;
        stdin
            .write_all(&self.opaque)
            .map_err(|e| HourwaveError::encode(format!("write frame {} to ffmpeg: {e}", idx.0)))?;
        self.last_idx = Some(idx);
        Ok(())
    }

    fn end(&mut self) -> HourwaveResult<()> {
        let mut enc = self
            .encoder
            .take()
            .ok_or_else(|| HourwaveError::encode("ffmpeg sink not started"))?;
        // EOF on stdin lets ffmpeg finish the file.
        drop(enc.stdin.take());

        let status = enc
            .child
            .wait()
            .map_err(|e| HourwaveError::encode(format!("wait for ffmpeg: {e}")))?;
        let stderr = match enc.stderr.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| HourwaveError::encode("ffmpeg stderr reader panicked"))?
                .map_err(|e| HourwaveError::encode(format!("read ffmpeg stderr: {e}")))?,
            None => Vec::new(),
        };

        if !status.success() {
            return Err(HourwaveError::encode(format!(
                "ffmpeg failed ({status}): {}",
                String::from_utf8_lossy(&stderr).trim()
            )));
        }
        tracing::debug!(out = %self.opts.out_path.display(), "ffmpeg finished");
        Ok(())
    }

    fn abort(&mut self) {
        if self.encoder.take().is_some() {
            tracing::warn!(
                out = %self.opts.out_path.display(),
                "killed ffmpeg; output is incomplete"
            );
        }
    }
}

fn check_yuv420_size(cfg: SinkConfig) -> HourwaveResult<()> {
    if cfg.width == 0 || cfg.height == 0 {
        return Err(HourwaveError::validation("ffmpeg sink needs a non-empty frame"));
    }
    // yuv420p subsamples chroma 2x2.
    if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
        return Err(HourwaveError::validation(format!(
            "MP4 output needs even dimensions, got {}x{}",
            cfg.width, cfg.height
        )));
    }
    if cfg.fps.num == 0 || cfg.fps.den == 0 {
        return Err(HourwaveError::validation("ffmpeg sink needs a non-zero fps"));
    }
    Ok(())
}

fn frame_len(cfg: SinkConfig) -> usize {
    (cfg.width as usize) * (cfg.height as usize) * 4
}

/// Command line for raw RGBA on stdin to H.264 MP4.
fn ffmpeg_args(opts: &FfmpegSinkOpts, cfg: SinkConfig) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();
    let mut push = |s: &str| args.push(s.into());

    push(if opts.overwrite { "-y" } else { "-n" });
    for a in ["-loglevel", "error", "-f", "rawvideo", "-pix_fmt", "rgba"] {
        push(a);
    }
    push("-s");
    push(format!("{}x{}", cfg.width, cfg.height).as_str());
    // Input rate must precede `-i`.
    push("-r");
    push(format!("{}/{}", cfg.fps.num, cfg.fps.den).as_str());
    for a in [
        "-i",
        "pipe:0",
        "-an",
        "-c:v",
        "libx264",
        "-pix_fmt",
        "yuv420p",
        "-movflags",
        "+faststart",
    ] {
        push(a);
    }
    args.push(opts.out_path.clone().into_os_string());
    args
}

/// Composite premultiplied RGBA8 over an opaque background color.
fn flatten_onto_background(
    dst: &mut [u8],
    src_premul: &[u8],
    bg_rgba: [u8; 4],
) -> HourwaveResult<()> {
    if dst.len() != src_premul.len() || !dst.len().is_multiple_of(4) {
        return Err(HourwaveError::validation(format!(
            "cannot flatten {} bytes into a {}-byte RGBA8 buffer",
            src_premul.len(),
            dst.len()
        )));
    }

    for (d, s) in dst.chunks_exact_mut(4).zip(src_premul.chunks_exact(4)) {
        let inv = 255 - u16::from(s[3]);
        for c in 0..3 {
            let v = u16::from(s[c]) + mul_div255_u16(u16::from(bg_rgba[c]), inv);
            d[c] = v.min(255) as u8;
        }
        d[3] = 255;
    }
    Ok(())
}

fn premultiply(straight: &[u8]) -> Vec<u8> {
    let mut out = straight.to_vec();
    for px in out.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        for c in &mut px[..3] {
            *c = mul_div255_u16(u16::from(*c), a) as u8;
        }
    }
    out
}

/// Whether `ffmpeg -version` runs successfully.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
