//! Deterministic card-back placeholder art.
//!
//! When no illustration exists for a card, the UI still needs something
//! stable to show. A rolling hash of the card id picks gradient colors
//! for a small SVG, so the same card id always renders the same
//! placeholder.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Stable 32-bit hash of a string (shift-and-subtract rolling hash).
#[must_use]
pub fn hash_code(input: &str) -> u32 {
    let mut hash: i32 = 0;
    for ch in input.chars() {
        hash = hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(ch as i32);
    }
    hash.unsigned_abs()
}

/// Render a gradient SVG placeholder for a card, as a base64 data URL.
///
/// Colors derive from [`hash_code`] of the card id, so the output is a
/// pure function of its input.
#[must_use]
pub fn svg_placeholder(card_id: &str) -> String {
    let hash = hash_code(card_id);
    let hue = hash % 360;
    let saturation = 60 + hash % 20;
    let lightness = 40 + (hash >> 8) % 20;

    let color1 = format!("hsl({hue}, {saturation}%, {lightness}%)");
    let color2 = format!(
        "hsl({}, {saturation}%, {}%)",
        (hue + 30) % 360,
        lightness + 10
    );

    let svg = format!(
        r##"<svg width="200" height="350" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="grad-{card_id}" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{color1};stop-opacity:1" />
      <stop offset="100%" style="stop-color:{color2};stop-opacity:1" />
    </linearGradient>
  </defs>
  <rect width="200" height="350" fill="url(#grad-{card_id})" rx="10"/>
  <text x="100" y="175" font-size="24" fill="white" text-anchor="middle" font-family="serif">&#9790;</text>
  <text x="100" y="210" font-size="12" fill="white" text-anchor="middle" font-family="serif" opacity="0.8">{card_id}</text>
</svg>"##
    );

    format!("data:image/svg+xml;base64,{}", BASE64.encode(svg))
}
