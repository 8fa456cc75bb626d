use super::assets::Assets;
use super::canvas::Canvas;
use crate::CANVAS_H;
use crate::CANVAS_W;
use crate::HAND_SIZE;
use crate::deal::Deal;
use crate::tiles::Tile;
use image::Rgba;

/// Hand tile slot, px.
const TILE_W: u32 = 60;
const TILE_H: u32 = 80;
/// Indicator row tiles at 80% of hand size.
const DORA_W: u32 = 48;
const DORA_H: u32 = 64;
/// Seven face-down slots, the indicator face up in the third.
const DORA_SLOTS: u32 = 7;
const DORA_SLOT: u32 = 2;
const DORA_Y: u32 = 40;
const HAND_Y: u32 = 170;

/// Table felt.
const FELT: Rgba<u8> = Rgba([0x08, 0x9b, 0x5f, 0xff]);
/// Face-down tile back and its edge.
const BACK: Rgba<u8> = Rgba([0x66, 0xb4, 0xfc, 0xff]);
const EDGE: Rgba<u8> = Rgba([0x55, 0x90, 0xc7, 0xff]);
/// 40% black drop shadow.
const SHADOW: Rgba<u8> = Rgba([0, 0, 0, 102]);

/// Compose a deal onto the 1000x300 canvas and encode it as PNG.
///
/// Every tile draw is an isolated outcome: a missing or unreadable asset
/// is logged and that slot degrades to its shadow, while the rest of the
/// image still renders. Only PNG encoding itself can fail the request.
pub fn compose(assets: &Assets, deal: &Deal) -> anyhow::Result<Vec<u8>> {
    let (canvas, failed) = draw(assets, deal);
    if failed > 0 {
        log::warn!(
            "{} of {} tile faces degraded to empty slots",
            failed,
            deal.hand().len() + 1
        );
    }
    canvas.png()
}

/// Draw the full scene, counting every face that fell back to its shadow.
/// The indicator is one more face outcome, no different from a hand tile.
fn draw(assets: &Assets, deal: &Deal) -> (Canvas, usize) {
    let mut canvas = Canvas::new(CANVAS_W, CANVAS_H, FELT);
    let mut failed = 0;
    let left = (CANVAS_W - HAND_SIZE as u32 * TILE_W) / 2;

    // indicator row shares the hand row's left margin
    for i in 0..DORA_SLOTS {
        let x = left + i * DORA_W;
        canvas.blend(x + 3, DORA_Y + 3, DORA_W, DORA_H, SHADOW);
        if i == DORA_SLOT {
            failed += face(&mut canvas, assets, deal.indicator(), x, DORA_Y, DORA_W, DORA_H)
                .is_err() as usize;
        } else {
            canvas.fill(x, DORA_Y, DORA_W, DORA_H, BACK);
            canvas.stroke(x, DORA_Y, DORA_W, DORA_H, EDGE);
        }
    }

    // all hand shadows first, then the faces on top
    for i in 0..deal.hand().len() as u32 {
        canvas.blend(left + i * TILE_W + 4, HAND_Y + 4, TILE_W, TILE_H, SHADOW);
    }
    failed += deal
        .hand()
        .iter()
        .enumerate()
        .map(|(i, &tile)| face(&mut canvas, assets, tile, left + i as u32 * TILE_W, HAND_Y, TILE_W, TILE_H))
        .filter(|outcome| outcome.is_err())
        .count();

    (canvas, failed)
}

fn face(
    canvas: &mut Canvas,
    assets: &Assets,
    tile: Tile,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
) -> anyhow::Result<()> {
    let img = assets
        .load(tile, w, h)
        .inspect_err(|e| log::warn!("tile {} failed to render: {:#}", tile, e))?;
    canvas.paste(&img, x, y);
    Ok(())
}
