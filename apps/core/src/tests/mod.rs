//! Test Module
//!
//! Cross-module test suite for the MediBot core.
//!
//! ## Test Categories
//! - `brain_tests`: classification priority and reply composition
//! - `session_tests`: session tracking and bulk clearing through the bot
//! - `integration_tests`: end-to-end conversations through the supervisor

pub mod session_tests;

use crate::brain::Picker;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Always picks the same index.
pub struct FixedPicker(pub usize);

impl Picker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// Walks 0, 1, 2, ... wrapping at `len`.
#[derive(Default)]
pub struct CyclingPicker {
    next: AtomicUsize,
}

impl Picker for CyclingPicker {
    fn pick(&self, len: usize) -> usize {
        self.next.fetch_add(1, Ordering::Relaxed) % len
    }
}
