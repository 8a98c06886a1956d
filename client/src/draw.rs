//! Software rendering into the fixed-size RGBA framebuffer.
//!
//! The playfield is drawn at its native 800x600 and scaled to the window by
//! the surface layer, so nothing here needs to know the window size. All
//! drawing is plain white on black.

use game_core::{Ball, Paddle, PaddleSide, Params, Rect, RoundPhase};

pub const FRAME_WIDTH: u32 = Params::PLAYFIELD_WIDTH as u32;
pub const FRAME_HEIGHT: u32 = Params::PLAYFIELD_HEIGHT as u32;

const SCORE_Y: i32 = 50;
const SCORE_MARGIN_X: i32 = 150;
const DIGIT_SCALE: i32 = 10;
const DIGIT_WIDTH: i32 = 3;
const DIGIT_HEIGHT: i32 = 5;

const WHITE: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

// 3x5 pixel masks for the score digits; '#' marks a lit pixel
const DIGITS: [[&str; DIGIT_HEIGHT as usize]; 10] = [
    ["###", "#.#", "#.#", "#.#", "###"], // 0
    ["..#", "..#", "..#", "..#", "..#"], // 1
    ["###", "..#", "###", "#..", "###"], // 2
    ["###", "..#", "###", "..#", "###"], // 3
    ["#.#", "#.#", "###", "..#", "..#"], // 4
    ["###", "#..", "###", "..#", "###"], // 5
    ["###", "#..", "###", "#.#", "###"], // 6
    ["###", "..#", "..#", "..#", "..#"], // 7
    ["###", "#.#", "###", "#.#", "###"], // 8
    ["###", "#.#", "###", "..#", "###"], // 9
];

/// Black out the whole frame
pub fn clear(frame: &mut [u8]) {
    frame.fill(0);
}

/// Fill a rect with white, clipped to the frame
fn fill_rect(frame: &mut [u8], rect: &Rect) {
    let x0 = rect.left().max(0);
    let y0 = rect.top().max(0);
    let x1 = rect.right().min(FRAME_WIDTH as i32);
    let y1 = rect.bottom().min(FRAME_HEIGHT as i32);

    for y in y0..y1 {
        for x in x0..x1 {
            let i = ((y * FRAME_WIDTH as i32 + x) * 4) as usize;
            frame[i..i + 4].copy_from_slice(&WHITE);
        }
    }
}

/// Dashed center line, one segment every other net-height block
pub fn draw_net(frame: &mut [u8]) {
    let x = (FRAME_WIDTH as i32 - Params::NET_WIDTH as i32) / 2;
    let mut y = 0;
    while y < FRAME_HEIGHT as i32 {
        fill_rect(
            frame,
            &Rect::new(x, y, Params::NET_WIDTH as i32, Params::NET_HEIGHT as i32),
        );
        y += Params::NET_HEIGHT as i32 * 2;
    }
}

/// Paddles are hidden during the end-of-round pause
pub fn draw_paddle(frame: &mut [u8], paddle: &Paddle, round: &RoundPhase) {
    if round.is_live() {
        fill_rect(frame, &paddle.rect());
    }
}

/// The ball is only visible while in play
pub fn draw_ball(frame: &mut [u8], ball: &Ball) {
    if ball.is_active() {
        fill_rect(frame, &ball.rect());
    }
}

fn draw_digit(frame: &mut [u8], digit: u32, x: i32, y: i32) {
    let glyph = &DIGITS[digit as usize];
    for (row, line) in glyph.iter().enumerate() {
        for (col, cell) in line.bytes().enumerate() {
            if cell == b'#' {
                fill_rect(
                    frame,
                    &Rect::new(
                        x + col as i32 * DIGIT_SCALE,
                        y + row as i32 * DIGIT_SCALE,
                        DIGIT_SCALE,
                        DIGIT_SCALE,
                    ),
                );
            }
        }
    }
}

/// Draw a paddle's score, digits walking right to left from the ones place
pub fn draw_score(frame: &mut [u8], paddle: &Paddle) {
    let mut x = match paddle.side {
        PaddleSide::Left => FRAME_WIDTH as i32 / 2 - SCORE_MARGIN_X,
        PaddleSide::Right => FRAME_WIDTH as i32 - SCORE_MARGIN_X,
    };

    if paddle.score == 0 {
        draw_digit(frame, 0, x, SCORE_Y);
        return;
    }

    let mut n = paddle.score;
    while n != 0 {
        draw_digit(frame, n % 10, x, SCORE_Y);
        x -= DIGIT_SCALE * DIGIT_WIDTH * 2;
        n /= 10;
    }
}
