//! # blogthumbs
//!
//! Makes thumbnails of blog images and prints the snippet that shows the
//! thumbnail linked to the full-size original.
//!
//! ```text
//! $ blogthumbs -s 240 photos/cat.jpg
//! [![Title](photos/t_cat.jpg)](photos/cat.jpg)
//! ```
//!
//! # Pipeline
//!
//! Every input goes through the same steps, one input at a time:
//!
//! ```text
//! detect  →  decode  →  scale  →  encode  →  write  →  render
//! header     jpeg/png/gif  short side   same format  temp+rename  markdown | hugo
//! ```
//!
//! A failure in any step ends that input only; the run moves on to the next
//! one and reports the failure with the source path.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Format detection, codecs, scaling math, resampling, atomic writes |
//! | [`process`] | Conversion requests, per-input errors, the ordered batch run |
//! | [`markup`] | Markdown and Hugo snippet rendering |
//! | [`naming`] | Thumbnail destination paths (`t_` prefix or destination directory) |
//! | [`config`] | Defaults, optional TOML config file, command-line overrides |
//! | [`output`] | Stdout/stderr formatting of a finished run |
//!
//! # Design Decisions
//!
//! ## Same Format In, Same Format Out
//!
//! A thumbnail is always encoded like its source: JPEG stays JPEG (quality
//! 100), PNG stays PNG, GIF stays GIF. Blog posts keep predictable file names
//! and no format negotiation is needed.
//!
//! ## Short Side Wins
//!
//! The requested size fixes the shorter side; the longer side follows the
//! aspect ratio. Portrait and landscape thumbnails therefore line up in height
//! or width respectively, and never come out smaller than the requested size.
//!
//! ## No Half-Written Thumbnails
//!
//! Encoding happens in memory and the bytes land in a hidden temp file that is
//! renamed over the destination only once complete. A failed conversion leaves
//! the destination as it was.

pub mod config;
pub mod imaging;
pub mod markup;
pub mod naming;
pub mod output;
pub mod process;

#[cfg(test)]
pub(crate) mod test_helpers;
