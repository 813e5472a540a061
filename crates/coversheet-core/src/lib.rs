//! Coversheet Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Coversheet page
//! layout engine. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes and angle/distance helpers in page units ([`geometry`] module)
//! - **Draw**: Strokes, segments, text definitions, font measurement and the
//!   rendering [`Surface`](draw::Surface) abstraction ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
