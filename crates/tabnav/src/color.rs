//! CLI color helpers.
//!
//! Respects `NO_COLOR`, `FORCE_COLOR` and TTY detection through owo-colors'
//! `if_supports_color()`. `--no-color` sets an in-process flag that bypasses
//! owo-colors entirely.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

static NO_COLOR_FLAG: AtomicBool = AtomicBool::new(false);

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    NO_COLOR_FLAG.store(true, Ordering::Relaxed);
}

#[derive(Debug, Clone, Copy)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

// xterm-256 cube entries, so they degrade cleanly on 256-color terminals.
const ROUTE: Rgb = Rgb::from_hex(0x5FAFD7); // routes and recipe names
const FLOW: Rgb = Rgb::from_hex(0xAFD75F); // flow and tab
const OVERLAY: Rgb = Rgb::from_hex(0xD787AF); // live overlays
const MUTED: Rgb = Rgb::from_hex(0x8A8A8A); // secondary info

fn no_color() -> bool {
    NO_COLOR_FLAG.load(Ordering::Relaxed)
}

fn paint(text: &str, rgb: Rgb) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.truecolor(rgb.r, rgb.g, rgb.b))
        .to_string()
}

pub fn route(text: &str) -> String {
    paint(text, ROUTE)
}

pub fn flow(text: &str) -> String {
    paint(text, FLOW)
}

pub fn overlay(text: &str) -> String {
    paint(text, OVERLAY)
}

pub fn muted(text: &str) -> String {
    paint(text, MUTED)
}

/// Bold text for section headers.
pub fn bold(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}
