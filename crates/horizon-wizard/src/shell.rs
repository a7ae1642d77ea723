//! The presentation shell: window chrome, header and button bar.
//!
//! The controller never draws anything. It hands a [`ShellChrome`] to
//! [`PresentationShell::open`] once, then publishes a [`ShellFrame`] after
//! every transition and refresh. A GUI toolkit binding implements the trait
//! by mapping frames onto real widgets; [`HeadlessShell`] records them
//! instead, for tests and console front ends.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::langpack::ButtonLabels;
use crate::registry::ScreenId;
use crate::screen::ContentId;
use crate::side_image::SideImage;
use crate::state::NavigationState;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// White, the default actions background.
    pub const WHITE: Color = Color::from_rgb8(255, 255, 255);

    /// Create a color from 8-bit components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Title and subtitle shown above the screen content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub subtitle: Option<String>,
}

/// Everything the shell needs to render the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellFrame {
    /// Identity of the current screen.
    pub screen: ScreenId,
    pub header: Header,
    /// Effective button enablement and the problem to display.
    pub navigation: NavigationState,
    /// Localized button labels.
    pub labels: ButtonLabels,
    pub content: Option<ContentId>,
}

/// Window decoration, fixed for the life of the wizard unless restyled.
#[derive(Debug, Clone, Default)]
pub struct ShellChrome {
    /// Window title.
    pub title: String,
    /// Window size in pixels, width then height.
    pub size: (u32, u32),
    /// Layout padding in pixels, horizontal then vertical.
    pub padding: (u32, u32),
    pub header_icon: Option<PathBuf>,
    pub header_image: Option<PathBuf>,
    pub side_image: Option<SideImage>,
    /// Background of the button bar.
    pub actions_background: Option<Color>,
    /// Background of the problem notification area.
    pub problem_background: Option<Color>,
}

/// The rendering side of a wizard.
///
/// Calls arrive on the controller's thread only.
pub trait PresentationShell {
    /// Create the window.
    fn open(&mut self, chrome: &ShellChrome);

    /// Render the current screen.
    fn publish(&mut self, frame: &ShellFrame);

    /// Release the window. No further calls follow except `open`.
    fn close(&mut self);

    /// Apply chrome changed after `open`.
    fn restyle(&mut self, _chrome: &ShellChrome) {}
}

#[derive(Debug, Default)]
struct Recording {
    chrome: Option<ShellChrome>,
    frames: Vec<ShellFrame>,
    open: bool,
    opens: usize,
    closes: usize,
    restyles: usize,
}

/// A shell that renders nothing and records every call.
///
/// Clones share the recording, so a test can keep one and give the other to
/// the wizard.
///
/// ```
/// use horizon_wizard::{HeadlessShell, PresentationShell, ShellChrome};
///
/// let shell = HeadlessShell::new();
/// let mut given_to_wizard = shell.clone();
/// given_to_wizard.open(&ShellChrome::default());
///
/// assert!(shell.is_open());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeadlessShell {
    recording: Arc<Mutex<Recording>>,
}

impl HeadlessShell {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every published frame, oldest first.
    pub fn frames(&self) -> Vec<ShellFrame> {
        self.recording.lock().frames.clone()
    }

    /// The most recent frame.
    pub fn last_frame(&self) -> Option<ShellFrame> {
        self.recording.lock().frames.last().cloned()
    }

    /// Number of published frames.
    pub fn frame_count(&self) -> usize {
        self.recording.lock().frames.len()
    }

    /// The chrome passed to the last `open` or `restyle`.
    pub fn chrome(&self) -> Option<ShellChrome> {
        self.recording.lock().chrome.clone()
    }

    /// Whether the window is open.
    pub fn is_open(&self) -> bool {
        self.recording.lock().open
    }

    /// Number of `open` calls.
    pub fn open_count(&self) -> usize {
        self.recording.lock().opens
    }

    /// Number of `close` calls.
    pub fn close_count(&self) -> usize {
        self.recording.lock().closes
    }

    /// Number of `restyle` calls.
    pub fn restyle_count(&self) -> usize {
        self.recording.lock().restyles
    }
}

impl PresentationShell for HeadlessShell {
    fn open(&mut self, chrome: &ShellChrome) {
        let mut recording = self.recording.lock();
        recording.chrome = Some(chrome.clone());
        recording.open = true;
        recording.opens += 1;
    }

    fn publish(&mut self, frame: &ShellFrame) {
        self.recording.lock().frames.push(frame.clone());
    }

    fn close(&mut self) {
        let mut recording = self.recording.lock();
        recording.open = false;
        recording.closes += 1;
    }

    fn restyle(&mut self, chrome: &ShellChrome) {
        let mut recording = self.recording.lock();
        recording.chrome = Some(chrome.clone());
        recording.restyles += 1;
    }
}
