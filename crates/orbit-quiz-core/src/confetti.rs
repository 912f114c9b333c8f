//! Confetti particles for the completion celebration. Drawing is up to the
//! host; this only moves the pieces.

use crate::constants::*;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub gravity: f32,
    pub rotation: f32,
    pub spin: f32,
    pub size: f32,
    /// Index into [`CONFETTI_COLORS`].
    pub color: usize,
    pub opacity: f32,
}

impl ConfettiPiece {
    /// New piece somewhere above the top edge of a `width` x `height` view.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            x: rng.gen_range(0.0..=width.max(0.0)),
            y: rng.gen_range(-height.max(10.0)..=-10.0),
            vx: rng.gen_range(-80.0..=80.0),
            vy: rng.gen_range(120.0..=260.0),
            gravity: rng.gen_range(240.0..=420.0),
            rotation: rng.gen_range(0.0..=std::f32::consts::TAU),
            spin: rng.gen_range(-8.0..=8.0),
            size: rng.gen_range(5.0..=10.0),
            color: rng.gen_range(0..CONFETTI_COLORS.len()),
            opacity: rng.gen_range(0.75..=1.0),
        }
    }

    pub fn color_css(&self) -> &'static str {
        CONFETTI_COLORS[self.color % CONFETTI_COLORS.len()]
    }

    fn out_of_bounds(&self, width: f32, height: f32) -> bool {
        self.y - self.size > height || self.x < -self.size * 2.0 || self.x > width + self.size * 2.0
    }
}

/// Pieces for a viewport `width` pixels wide.
pub fn piece_count(width: f32) -> usize {
    let base = ((width.max(0.0) * CONFETTI_WIDTH_FACTOR).floor() as usize)
        .clamp(CONFETTI_MIN_PIECES, CONFETTI_MAX_PIECES);
    ((base as f32 * CONFETTI_DENSITY_FACTOR).round() as usize).max(1)
}

#[derive(Debug, Default)]
pub struct Confetti {
    pieces: Vec<ConfettiPiece>,
    width: f32,
    height: f32,
    remaining: f32,
}

impl Confetti {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restarts the burst for `duration` seconds.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f32, height: f32, duration: f32) {
        self.width = width;
        self.height = height;
        self.remaining = duration.max(0.0);
        let count = piece_count(width);
        self.pieces.clear();
        self.pieces
            .extend((0..count).map(|_| ConfettiPiece::spawn(rng, width, height)));
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Integrates one frame. Returns whether the burst is still running.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R, dt: f32) -> bool {
        if !self.is_active() {
            return false;
        }
        let dt = dt.clamp(0.0, CONFETTI_MAX_STEP_SEC);
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.stop();
            return false;
        }
        let (w, h) = (self.width, self.height);
        for piece in &mut self.pieces {
            piece.vy += piece.gravity * dt;
            piece.x += piece.vx * dt;
            piece.y += piece.vy * dt;
            piece.rotation += piece.spin * dt;
            if piece.out_of_bounds(w, h) {
                *piece = ConfettiPiece::spawn(rng, w, h);
            }
        }
        true
    }

    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    pub fn is_active(&self) -> bool {
        !self.pieces.is_empty()
    }

    pub fn stop(&mut self) {
        self.pieces.clear();
        self.remaining = 0.0;
    }
}
