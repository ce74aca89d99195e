//! Example: skeletonize a synthetic voxel object and check its topology.
//!
//! Builds a solid ball with a handle (one tunnel), thins it with the chosen
//! variant and prints the topological invariants before and after together
//! with timing. The invariants must not change.
//!
//! Run from the workspace root:
//!   cargo run -p voxel-skeleton --example skeletonize -- --help
//!   cargo run -p voxel-skeleton --example skeletonize -- --variant curve

use std::time::Instant;

use anyhow::{Result, bail};
use clap::Parser;
use voxel_skeleton::{Grid3, invariants};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Thin a synthetic voxel object and report its topology")]
struct Args {
    /// Ball radius in voxels
    #[arg(long, default_value_t = 10)]
    radius: i64,

    /// Thinning variant: ultimate, curve, surface, curve-asym, directional
    #[arg(long, default_value = "curve")]
    variant: String,

    /// Stop after this many thinning steps (default: run to stability)
    #[arg(long)]
    max_steps: Option<u32>,
}

// ── Synthetic object ──────────────────────────────────────────────────────────

/// A solid ball with a square handle welded onto it: one component, one
/// tunnel, no cavity.
fn ball_with_handle(radius: i64) -> Grid3<u8> {
    let ext = (2 * radius + 12) as usize;
    let c = radius + 2;
    let mut g = Grid3::new_fill(ext, ext, ext, 0u8);
    for z in 0..ext as i64 {
        for y in 0..ext as i64 {
            for x in 0..ext as i64 {
                let (dx, dy, dz) = (x - c, y - c, z - c);
                if dx * dx + dy * dy + dz * dz <= radius * radius {
                    *g.get_mut(x as usize, y as usize, z as usize).unwrap() = 1;
                }
            }
        }
    }
    // handle: a 2-thick arch leaving the ball on +x and coming back on +z
    let a = (c + radius - 1) as usize;
    let b = a + 6;
    for t in a..=b {
        for w in 0..2 {
            *g.get_mut(t, c as usize + w, c as usize).unwrap() = 1;
            *g.get_mut(c as usize, c as usize + w, t).unwrap() = 1;
        }
    }
    for t in c as usize..=b {
        for w in 0..2 {
            *g.get_mut(b, c as usize + w, t).unwrap() = 1;
            *g.get_mut(t, c as usize + w, b).unwrap() = 1;
        }
    }
    g
}

fn object_len(g: &Grid3<u8>) -> usize {
    g.data().iter().filter(|&&v| v != 0).count()
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let mut grid = ball_with_handle(args.radius);
    let before = invariants(&grid);
    println!(
        "object: {} voxels, components={}, cavities={}, tunnels={}",
        object_len(&grid),
        before.components,
        before.cavities,
        before.tunnels
    );

    let t0 = Instant::now();
    match args.variant.as_str() {
        "ultimate" => voxel_skeleton::ultimate_symmetric(&mut grid, args.max_steps, None)?,
        "curve" => voxel_skeleton::curve_symmetric(&mut grid, args.max_steps, None)?,
        "surface" => voxel_skeleton::surface_symmetric(&mut grid, args.max_steps, None)?,
        "curve-asym" => voxel_skeleton::curve_asymmetric_persistent(&mut grid, args.max_steps, 3, None)?,
        "directional" => voxel_skeleton::ultimate_directional(&mut grid, args.max_steps, None)?,
        other => bail!("unknown variant {other:?}"),
    }
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    let after = invariants(&grid);
    println!(
        "skeleton: {} voxels, components={}, cavities={}, tunnels={}  ({elapsed_ms:.2} ms)",
        object_len(&grid),
        after.components,
        after.cavities,
        after.tunnels
    );

    if after != before {
        bail!("thinning changed the topology");
    }
    Ok(())
}
