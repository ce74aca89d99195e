//! The public thinning drivers.
//!
//! Every driver repeats the same outer scheme: mark candidate simple
//! voxels, retain crucial cliques, remove what is left, until stability or
//! `max_steps` iterations. They differ in how candidates are gated (end
//! points, isthmuses, residual voxels, sweep direction, persistence) and in
//! whether the clique matchers are symmetric or asymmetric.
//!
//! All drivers require the object not to touch the grid border; thin with a
//! one-voxel background margin. Surviving voxels are normalized to 255.

use log::debug;

use crate::clique;
use crate::engine::Reduction;
use crate::persistence::PersistenceTracker;
use crate::scan;
use crate::state::{self, INHIBIT, SIMPLE};
use vx_core::{Error, Grid3};

/// Marker for voxels that survive [`removal_step_map`].
pub const SURVIVOR_MARK: u32 = 255;

fn step_limit(max_steps: Option<u32>) -> u32 {
    max_steps.unwrap_or(u32::MAX)
}

fn seed_inhibit(grid: &Grid3<u8>, inhibit: Option<&Grid3<u8>>) -> Result<Vec<u8>, Error> {
    match inhibit {
        Some(inh) => {
            if !grid.same_extents(inh) {
                return Err(Error::ExtentsMismatch);
            }
            Ok(inh
                .data()
                .iter()
                .map(|&v| if v != 0 { INHIBIT } else { 0 })
                .collect())
        }
        None => Ok(vec![0u8; grid.len()]),
    }
}

fn fold_pattern_ends(red: &Reduction, inhibit: &mut [u8]) {
    for i in 0..red.state().len() {
        if state::is_object(red.state()[i]) && scan::match_end(&red.neighborhood(i)) {
            inhibit[i] = INHIBIT;
        }
    }
}

fn fold_count_ends(red: &Reduction, inhibit: &mut [u8]) {
    let dims = red.dims();
    for i in 0..red.state().len() {
        if state::is_object(red.state()[i]) && scan::is_end_count(red.state(), i, &dims) {
            inhibit[i] = INHIBIT;
        }
    }
}

fn strip_inhibited(red: &mut Reduction, inhibit: &[u8]) {
    for (s, &inh) in red.state_mut().iter_mut().zip(inhibit) {
        if inh != 0 {
            state::unset(s, SIMPLE);
        }
    }
}

fn record_births(
    red: &Reduction,
    tracker: &mut PersistenceTracker,
    step: u32,
    curve: bool,
    surface: bool,
) {
    for (i, &s) in red.state().iter().enumerate() {
        if (curve && state::is_curve(s)) || (surface && state::is_surface(s)) {
            tracker.record_birth(i, step);
        }
    }
}

/// Ultimate symmetric thinning: no geometric constraints, every component
/// shrinks to a minimal homotopy-equivalent set. Whole components about to
/// vanish are kept in their last shape. An inhibition grid is not
/// supported by this scheme.
pub fn ultimate_symmetric(
    grid: &mut Grid3<u8>,
    max_steps: Option<u32>,
    inhibit: Option<&Grid3<u8>>,
) -> Result<(), Error> {
    if inhibit.is_some() {
        return Err(Error::InhibitUnsupported);
    }
    let limit = step_limit(max_steps);
    let mut red = Reduction::from_grid(grid);
    let mut step = 0u32;
    while step < limit {
        step += 1;
        debug!("ultimate_symmetric: step {step}");
        red.mark_simple(None);
        red.crucial_passes();
        if !red.commit_keep_isolated() {
            break;
        }
    }
    debug!("ultimate_symmetric: stable after {step} steps");
    red.write_back(grid);
    Ok(())
}

/// Ultimate asymmetric thinning: one representative per crucial clique is
/// retained, giving thinner results than the symmetric scheme.
pub fn ultimate_asymmetric(
    grid: &mut Grid3<u8>,
    max_steps: Option<u32>,
    inhibit: Option<&Grid3<u8>>,
) -> Result<(), Error> {
    let limit = step_limit(max_steps);
    let inhib = seed_inhibit(grid, inhibit)?;
    let mut red = Reduction::from_grid(grid);
    let mut step = 0u32;
    while step < limit {
        step += 1;
        debug!("ultimate_asymmetric: step {step}");
        red.mark_simple(Some(&inhib));
        red.asym_crucial_passes();
        if !red.commit() {
            break;
        }
    }
    debug!("ultimate_asymmetric: stable after {step} steps");
    red.write_back(grid);
    Ok(())
}

/// Curve-preserving symmetric thinning based on 1D isthmuses: voxels whose
/// neighborhood splits the object into exactly two parts are accumulated
/// into the inhibition set.
pub fn curve_symmetric(
    grid: &mut Grid3<u8>,
    max_steps: Option<u32>,
    inhibit: Option<&Grid3<u8>>,
) -> Result<(), Error> {
    let limit = step_limit(max_steps);
    let mut inhib = seed_inhibit(grid, inhibit)?;
    let mut red = Reduction::from_grid(grid);
    let mut step = 0u32;
    while step < limit {
        step += 1;
        debug!("curve_symmetric: step {step}");
        red.mark_simple(Some(&inhib));
        red.matcher_pass(clique::face2_tagging_views);
        red.matcher_pass(clique::edge1_tagging_views);
        red.tag_isthmuses(true, false, true);
        red.fold_tags_into(&mut inhib, true, false);
        red.crucial_passes();
        if !red.commit() {
            break;
        }
    }
    debug!("curve_symmetric: stable after {step} steps");
    red.write_back(grid);
    Ok(())
}

/// Curve-preserving symmetric thinning based on end points: voxels matching
/// an end-of-curve neighborhood pattern are accumulated into the
/// inhibition set.
pub fn curve_symmetric_ends(
    grid: &mut Grid3<u8>,
    max_steps: Option<u32>,
    inhibit: Option<&Grid3<u8>>,
) -> Result<(), Error> {
    let limit = step_limit(max_steps);
    let mut inhib = seed_inhibit(grid, inhibit)?;
    let mut red = Reduction::from_grid(grid);
    let mut step = 0u32;
    while step < limit {
        step += 1;
        debug!("curve_symmetric_ends: step {step}");
        fold_pattern_ends(&red, &mut inhib);
        red.mark_simple(Some(&inhib));
        red.crucial_passes();
        if !red.commit() {
            break;
        }
    }
    debug!("curve_symmetric_ends: stable after {step} steps");
    red.write_back(grid);
    Ok(())
}

/// Asymmetric end-point variant: an end is a voxel with exactly one object
/// neighbor.
pub fn curve_asymmetric_ends(
    grid: &mut Grid3<u8>,
    max_steps: Option<u32>,
    inhibit: Option<&Grid3<u8>>,
) -> Result<(), Error> {
    let limit = step_limit(max_steps);
    let mut inhib = seed_inhibit(grid, inhibit)?;
    let mut red = Reduction::from_grid(grid);
    let mut step = 0u32;
    while step < limit {
        step += 1;
        debug!("curve_asymmetric_ends: step {step}");
        fold_count_ends(&red, &mut inhib);
        red.mark_simple(Some(&inhib));
        red.asym_crucial_passes();
        if !red.commit() {
            break;
        }
    }
    debug!("curve_asymmetric_ends: stable after {step} steps");
    red.write_back(grid);
    Ok(())
}

/// Surface-preserving symmetric thinning that keeps residual voxels:
/// voxels with no 6-adjacent interior neighbor stop being candidates,
/// preserving a shell around what used to be thick.
pub fn surface_residual_symmetric(
    grid: &mut Grid3<u8>,
    max_steps: Option<u32>,
    inhibit: Option<&Grid3<u8>>,
) -> Result<(), Error> {
    let limit = step_limit(max_steps);
    let inhib = seed_inhibit(grid, inhibit)?;
    let mut red = Reduction::from_grid(grid);
    let mut step = 0u32;
    while step < limit {
        step += 1;
        debug!("surface_residual_symmetric: step {step}");
        red.mark_simple(Some(&inhib));
        red.mark_interior();
        red.exclude_residual6();
        red.crucial_passes();
        if !red.commit() {
            break;
        }
    }
    debug!("surface_residual_symmetric: stable after {step} steps");
    red.write_back(grid);
    Ok(())
}

/// Surface-preserving symmetric thinning based on 2D isthmuses.
pub fn surface_symmetric(
    grid: &mut Grid3<u8>,
    max_steps: Option<u32>,
    inhibit: Option<&Grid3<u8>>,
) -> Result<(), Error> {
    let limit = step_limit(max_steps);
    let mut inhib = seed_inhibit(grid, inhibit)?;
    let mut red = Reduction::from_grid(grid);
    let mut step = 0u32;
    while step < limit {
        step += 1;
        debug!("surface_symmetric: step {step}");
        red.mark_simple(Some(&inhib));
        red.matcher_pass(clique::face2_tagging_views);
        red.tag_isthmuses(false, true, true);
        red.fold_tags_into(&mut inhib, false, true);
        red.crucial_passes();
        if !red.commit() {
            break;
        }
    }
    debug!("surface_symmetric: stable after {step} steps");
    red.write_back(grid);
    Ok(())
}

/// Symmetric thinning preserving both curve and surface isthmuses.
pub fn surface_curve_symmetric(
    grid: &mut Grid3<u8>,
    max_steps: Option<u32>,
    inhibit: Option<&Grid3<u8>>,
) -> Result<(), Error> {
    let limit = step_limit(max_steps);
    let mut inhib = seed_inhibit(grid, inhibit)?;
    let mut red = Reduction::from_grid(grid);
    let mut step = 0u32;
    while step < limit {
        step += 1;
        debug!("surface_curve_symmetric: step {step}");
        red.mark_simple(Some(&inhib));
        red.matcher_pass(clique::face2_tagging_views);
        red.matcher_pass(clique::edge1_tagging_views);
        red.tag_isthmuses(true, true, true);
        red.fold_tags_into(&mut inhib, true, true);
        red.crucial_passes();
        if !red.commit() {
            break;
        }
    }
    debug!("surface_curve_symmetric: stable after {step} steps");
    red.write_back(grid);
    Ok(())
}

/// Ultimate directional thinning: each step sweeps the six face directions
/// in turn, considering only voxels exposed to the current direction.
pub fn ultimate_directional(
    grid: &mut Grid3<u8>,
    max_steps: Option<u32>,
    inhibit: Option<&Grid3<u8>>,
) -> Result<(), Error> {
    let limit = step_limit(max_steps);
    let inhib = seed_inhibit(grid, inhibit)?;
    let mut red = Reduction::from_grid(grid);
    let mut step = 0u32;
    while step < limit {
        step += 1;
        debug!("ultimate_directional: step {step}");
        let mut removed = false;
        for dir in 0..scan::DIRECTIONS.len() {
            red.mark_simple_directional(&inhib, dir);
            red.crucial_passes();
            if red.commit() {
                removed = true;
            }
        }
        if !removed {
            break;
        }
    }
    debug!("ultimate_directional: stable after {step} steps");
    red.write_back(grid);
    Ok(())
}

/// Directional thinning keeping residual voxels, as
/// [`surface_residual_symmetric`] per sweep direction.
pub fn surface_residual_directional(
    grid: &mut Grid3<u8>,
    max_steps: Option<u32>,
    inhibit: Option<&Grid3<u8>>,
) -> Result<(), Error> {
    let limit = step_limit(max_steps);
    let inhib = seed_inhibit(grid, inhibit)?;
    let mut red = Reduction::from_grid(grid);
    let mut step = 0u32;
    while step < limit {
        step += 1;
        debug!("surface_residual_directional: step {step}");
        let mut removed = false;
        for dir in 0..scan::DIRECTIONS.len() {
            red.mark_simple_directional(&inhib, dir);
            red.mark_interior();
            red.exclude_residual6();
            red.crucial_passes();
            if red.commit() {
                removed = true;
            }
        }
        if !removed {
            break;
        }
    }
    debug!("surface_residual_directional: stable after {step} steps");
    red.write_back(grid);
    Ok(())
}

/// Directional thinning preserving 2D isthmuses.
pub fn surface_directional(
    grid: &mut Grid3<u8>,
    max_steps: Option<u32>,
    inhibit: Option<&Grid3<u8>>,
) -> Result<(), Error> {
    let limit = step_limit(max_steps);
    let mut inhib = seed_inhibit(grid, inhibit)?;
    let mut red = Reduction::from_grid(grid);
    let mut step = 0u32;
    while step < limit {
        step += 1;
        debug!("surface_directional: step {step}");
        let mut removed = false;
        for dir in 0..scan::DIRECTIONS.len() {
            red.mark_simple_directional(&inhib, dir);
            red.fold_isthmuses_directional(&mut inhib, false, true);
            red.crucial_passes();
            if red.commit() {
                removed = true;
            }
        }
        if !removed {
            break;
        }
    }
    debug!("surface_directional: stable after {step} steps");
    red.write_back(grid);
    Ok(())
}

/// Directional thinning preserving both curve and surface isthmuses.
pub fn surface_curve_directional(
    grid: &mut Grid3<u8>,
    max_steps: Option<u32>,
    inhibit: Option<&Grid3<u8>>,
) -> Result<(), Error> {
    let limit = step_limit(max_steps);
    let mut inhib = seed_inhibit(grid, inhibit)?;
    let mut red = Reduction::from_grid(grid);
    let mut step = 0u32;
    while step < limit {
        step += 1;
        debug!("surface_curve_directional: step {step}");
        let mut removed = false;
        for dir in 0..scan::DIRECTIONS.len() {
            red.mark_simple_directional(&inhib, dir);
            red.fold_isthmuses_directional(&mut inhib, true, true);
            red.crucial_passes();
            if red.commit() {
                removed = true;
            }
        }
        if !removed {
            break;
        }
    }
    debug!("surface_curve_directional: stable after {step} steps");
    red.write_back(grid);
    Ok(())
}

/// Curve-preserving thinning with persistence filtering: a 1D isthmus only
/// enters the inhibition set after staying an isthmus for `persistence`
/// steps. Transient isthmuses arising from surface collapse are thinned
/// through.
pub fn curve_symmetric_persistent(
    grid: &mut Grid3<u8>,
    max_steps: Option<u32>,
    persistence: u32,
    inhibit: Option<&Grid3<u8>>,
) -> Result<(), Error> {
    let limit = step_limit(max_steps);
    let mut inhib = seed_inhibit(grid, inhibit)?;
    let mut red = Reduction::from_grid(grid);
    let mut tracker = PersistenceTracker::new(grid.len());
    let mut step = 0u32;
    while step < limit {
        step += 1;
        debug!("curve_symmetric_persistent: step {step}");
        red.mark_simple(None);
        red.matcher_pass(clique::face2_tagging_views);
        red.matcher_pass(clique::edge1_tagging_views);
        red.tag_isthmuses(true, false, false);
        record_births(&red, &mut tracker, step, true, false);
        red.crucial_passes();
        // expiry is checked against the upcoming step; retained isthmuses
        // only, so freshly melting surface voxels stay removable
        for (i, &s) in red.state().iter().enumerate() {
            if state::is_object(s)
                && (!state::is_simple(s) || state::is_crucial(s))
                && tracker.expired(i, step + 1, persistence)
            {
                inhib[i] = INHIBIT;
            }
        }
        strip_inhibited(&mut red, &inhib);
        if !red.commit() {
            break;
        }
    }
    debug!("curve_symmetric_persistent: stable after {step} steps");
    red.write_back(grid);
    Ok(())
}

/// Surface-preserving thinning with persistence filtering of 2D isthmuses.
pub fn surface_symmetric_persistent(
    grid: &mut Grid3<u8>,
    max_steps: Option<u32>,
    persistence: u32,
    inhibit: Option<&Grid3<u8>>,
) -> Result<(), Error> {
    let limit = step_limit(max_steps);
    let mut inhib = seed_inhibit(grid, inhibit)?;
    let mut red = Reduction::from_grid(grid);
    let mut tracker = PersistenceTracker::new(grid.len());
    let mut step = 0u32;
    while step < limit {
        step += 1;
        debug!("surface_symmetric_persistent: step {step}");
        red.mark_simple(None);
        red.matcher_pass(clique::face2_tagging_views);
        red.tag_isthmuses(false, true, false);
        record_births(&red, &mut tracker, step, false, true);
        for (i, inh) in inhib.iter_mut().enumerate() {
            if tracker.expired(i, step + 1, persistence) {
                *inh = INHIBIT;
            }
        }
        strip_inhibited(&mut red, &inhib);
        red.crucial_passes();
        if !red.commit() {
            break;
        }
    }
    debug!("surface_symmetric_persistent: stable after {step} steps");
    red.write_back(grid);
    Ok(())
}

/// Persistence-filtered thinning preserving both isthmus classes.
pub fn surface_curve_symmetric_persistent(
    grid: &mut Grid3<u8>,
    max_steps: Option<u32>,
    persistence: u32,
    inhibit: Option<&Grid3<u8>>,
) -> Result<(), Error> {
    let limit = step_limit(max_steps);
    let mut inhib = seed_inhibit(grid, inhibit)?;
    let mut red = Reduction::from_grid(grid);
    let mut tracker = PersistenceTracker::new(grid.len());
    let mut step = 0u32;
    while step < limit {
        step += 1;
        debug!("surface_curve_symmetric_persistent: step {step}");
        red.mark_simple(None);
        red.matcher_pass(clique::face2_tagging_views);
        red.matcher_pass(clique::edge1_tagging_views);
        red.tag_isthmuses(true, true, false);
        record_births(&red, &mut tracker, step, true, true);
        for (i, inh) in inhib.iter_mut().enumerate() {
            if tracker.expired(i, step, persistence) {
                *inh = INHIBIT;
            }
        }
        strip_inhibited(&mut red, &inhib);
        red.crucial_passes();
        if !red.commit() {
            break;
        }
    }
    debug!("surface_curve_symmetric_persistent: stable after {step} steps");
    red.write_back(grid);
    Ok(())
}

/// Asymmetric curve-preserving thinning with persistence filtering.
pub fn curve_asymmetric_persistent(
    grid: &mut Grid3<u8>,
    max_steps: Option<u32>,
    persistence: u32,
    inhibit: Option<&Grid3<u8>>,
) -> Result<(), Error> {
    let limit = step_limit(max_steps);
    let mut inhib = seed_inhibit(grid, inhibit)?;
    let mut red = Reduction::from_grid(grid);
    let mut tracker = PersistenceTracker::new(grid.len());
    let mut step = 0u32;
    while step < limit {
        step += 1;
        debug!("curve_asymmetric_persistent: step {step}");
        red.tag_isthmuses(true, false, false);
        record_births(&red, &mut tracker, step, true, false);
        red.mark_simple(Some(&inhib));
        for (i, s) in red.state_mut().iter_mut().enumerate() {
            if tracker.expired(i, step, persistence) {
                inhib[i] = INHIBIT;
                state::unset(s, SIMPLE);
            }
        }
        red.asym_crucial_passes();
        if !red.commit() {
            break;
        }
    }
    debug!("curve_asymmetric_persistent: stable after {step} steps");
    red.write_back(grid);
    Ok(())
}

/// Asymmetric surface-preserving thinning with persistence filtering.
pub fn surface_asymmetric_persistent(
    grid: &mut Grid3<u8>,
    max_steps: Option<u32>,
    persistence: u32,
    inhibit: Option<&Grid3<u8>>,
) -> Result<(), Error> {
    let limit = step_limit(max_steps);
    let mut inhib = seed_inhibit(grid, inhibit)?;
    let mut red = Reduction::from_grid(grid);
    let mut tracker = PersistenceTracker::new(grid.len());
    let mut step = 0u32;
    while step < limit {
        step += 1;
        debug!("surface_asymmetric_persistent: step {step}");
        red.tag_isthmuses(false, true, false);
        record_births(&red, &mut tracker, step, false, true);
        red.mark_simple(Some(&inhib));
        for (i, s) in red.state_mut().iter_mut().enumerate() {
            if tracker.expired(i, step, persistence) {
                inhib[i] = INHIBIT;
                state::unset(s, SIMPLE);
            }
        }
        red.asym_crucial_passes();
        if !red.commit() {
            break;
        }
    }
    debug!("surface_asymmetric_persistent: stable after {step} steps");
    red.write_back(grid);
    Ok(())
}

/// Asymmetric persistence-filtered thinning preserving both isthmus
/// classes.
pub fn surface_curve_asymmetric_persistent(
    grid: &mut Grid3<u8>,
    max_steps: Option<u32>,
    persistence: u32,
    inhibit: Option<&Grid3<u8>>,
) -> Result<(), Error> {
    let limit = step_limit(max_steps);
    let mut inhib = seed_inhibit(grid, inhibit)?;
    let mut red = Reduction::from_grid(grid);
    let mut tracker = PersistenceTracker::new(grid.len());
    let mut step = 0u32;
    while step < limit {
        step += 1;
        debug!("surface_curve_asymmetric_persistent: step {step}");
        red.tag_isthmuses(true, true, false);
        record_births(&red, &mut tracker, step, true, true);
        red.mark_simple(Some(&inhib));
        for (i, s) in red.state_mut().iter_mut().enumerate() {
            if tracker.expired(i, step, persistence) {
                inhib[i] = INHIBIT;
                state::unset(s, SIMPLE);
            }
        }
        red.asym_crucial_passes();
        if !red.commit() {
            break;
        }
    }
    debug!("surface_curve_asymmetric_persistent: stable after {step} steps");
    red.write_back(grid);
    Ok(())
}

/// Ultimate symmetric thinning that records, for every voxel, the step at
/// which it was removed. Survivors are marked [`SURVIVOR_MARK`], background
/// stays 0. An inhibition grid is not supported.
pub fn removal_step_map(
    grid: &mut Grid3<u8>,
    inhibit: Option<&Grid3<u8>>,
    out: &mut Grid3<u32>,
) -> Result<(), Error> {
    if inhibit.is_some() {
        return Err(Error::InhibitUnsupported);
    }
    if !grid.same_extents(out) {
        return Err(Error::ExtentsMismatch);
    }
    for (dst, &src) in out.data_mut().iter_mut().zip(grid.data()) {
        *dst = if src != 0 { SURVIVOR_MARK } else { 0 };
    }
    let mut red = Reduction::from_grid(grid);
    let mut step = 0u32;
    loop {
        step += 1;
        debug!("removal_step_map: step {step}");
        red.mark_simple(None);
        red.crucial_passes();
        let marks = out.data_mut();
        if !red.commit_with(|i| marks[i] = step) {
            break;
        }
    }
    debug!("removal_step_map: stable after {step} steps");
    red.write_back(grid);
    Ok(())
}

/// Curve-preserving thinning that outputs each voxel's isthmus lifetime
/// (removal step minus first step classified as a 1D isthmus). Voxels
/// removed before ever being an isthmus stay 0; survivors get +infinity.
pub fn curve_lifetime_map(grid: &mut Grid3<u8>, out: &mut Grid3<f32>) -> Result<(), Error> {
    lifetime_map(grid, out, true, false, "curve_lifetime_map")
}

/// Surface analogue of [`curve_lifetime_map`], tracking 2D isthmuses.
pub fn surface_lifetime_map(grid: &mut Grid3<u8>, out: &mut Grid3<f32>) -> Result<(), Error> {
    lifetime_map(grid, out, false, true, "surface_lifetime_map")
}

/// Mixed analogue of [`curve_lifetime_map`], tracking both isthmus classes.
pub fn surface_curve_lifetime_map(
    grid: &mut Grid3<u8>,
    out: &mut Grid3<f32>,
) -> Result<(), Error> {
    lifetime_map(grid, out, true, true, "surface_curve_lifetime_map")
}

fn lifetime_map(
    grid: &mut Grid3<u8>,
    out: &mut Grid3<f32>,
    curve: bool,
    surface: bool,
    name: &str,
) -> Result<(), Error> {
    if !grid.same_extents(out) {
        return Err(Error::ExtentsMismatch);
    }
    out.fill(0.0);
    let mut red = Reduction::from_grid(grid);
    let mut tracker = PersistenceTracker::new(grid.len());
    let mut step = 0u32;
    loop {
        step += 1;
        debug!("{name}: step {step}");
        red.mark_simple(None);
        red.matcher_pass(clique::face2_tagging_views);
        if curve {
            red.matcher_pass(clique::edge1_tagging_views);
        }
        red.tag_isthmuses(curve, surface, false);
        record_births(&red, &mut tracker, step, curve, surface);
        red.crucial_passes();
        let lifetimes = out.data_mut();
        let removed = red.commit_with(|i| {
            if let Some(birth) = tracker.birth(i) {
                lifetimes[i] = (step - birth) as f32;
            }
        });
        if !removed {
            break;
        }
    }
    debug!("{name}: stable after {step} steps");
    for (i, &s) in red.state().iter().enumerate() {
        if s != 0 {
            out.data_mut()[i] = f32::INFINITY;
        }
    }
    red.write_back(grid);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_cube(side: usize, pad: usize) -> Grid3<u8> {
        let ext = side + 2 * pad;
        let mut g = Grid3::new_fill(ext, ext, ext, 0u8);
        for z in pad..pad + side {
            for y in pad..pad + side {
                for x in pad..pad + side {
                    *g.get_mut(x, y, z).unwrap() = 1;
                }
            }
        }
        g
    }

    fn object_len(g: &Grid3<u8>) -> usize {
        g.data().iter().filter(|&&v| v != 0).count()
    }

    #[test]
    fn ultimate_symmetric_rejects_inhibit() {
        let mut g = solid_cube(3, 1);
        let inh = Grid3::new_fill(5, 5, 5, 0u8);
        assert_eq!(
            ultimate_symmetric(&mut g, None, Some(&inh)),
            Err(Error::InhibitUnsupported)
        );
    }

    #[test]
    fn extents_mismatch_is_reported() {
        let mut g = solid_cube(3, 1);
        let inh = Grid3::new_fill(4, 5, 5, 0u8);
        assert_eq!(
            curve_symmetric(&mut g, None, Some(&inh)),
            Err(Error::ExtentsMismatch)
        );
    }

    #[test]
    fn cube_shrinks_and_survivors_are_normalized() {
        let mut g = solid_cube(5, 1);
        let before = object_len(&g);
        ultimate_symmetric(&mut g, None, None).unwrap();
        let after = object_len(&g);
        assert!(after > 0);
        assert!(after < before);
        assert!(g.data().iter().all(|&v| v == 0 || v == 255));
    }

    #[test]
    fn max_steps_bounds_the_erosion() {
        let mut one = solid_cube(7, 1);
        let mut full = one.clone();
        ultimate_symmetric(&mut one, Some(1), None).unwrap();
        ultimate_symmetric(&mut full, None, None).unwrap();
        assert!(object_len(&one) >= object_len(&full));
        // a single step peels at most the outer layer
        assert!(object_len(&one) >= 5 * 5 * 5);
    }

    #[test]
    fn inhibited_voxels_survive() {
        let mut g = solid_cube(5, 1);
        let mut inh = Grid3::new_fill(7, 7, 7, 0u8);
        *inh.get_mut(1, 1, 1).unwrap() = 1; // a cube corner
        curve_symmetric(&mut g, None, Some(&inh)).unwrap();
        assert_eq!(g.get(1, 1, 1), Some(&255));
    }

    #[test]
    fn erosion_is_monotone() {
        let mut thinned = solid_cube(5, 1);
        let original = thinned.clone();
        surface_curve_symmetric(&mut thinned, None, None).unwrap();
        for (t, o) in thinned.data().iter().zip(original.data()) {
            assert!(*t == 0 || *o != 0);
        }
    }

    #[test]
    fn line_is_stable_under_curve_thinning() {
        let mut g = Grid3::new_fill(9, 5, 5, 0u8);
        for x in 1..8 {
            *g.get_mut(x, 2, 2).unwrap() = 1;
        }
        let before = g.clone();
        curve_symmetric_ends(&mut g, None, None).unwrap();
        for (a, b) in g.data().iter().zip(before.data()) {
            assert_eq!(*a != 0, *b != 0);
        }
    }

    #[test]
    fn removal_step_map_orders_layers() {
        let mut g = solid_cube(5, 1);
        let mut out = Grid3::new_fill(7, 7, 7, 0u32);
        removal_step_map(&mut g, None, &mut out).unwrap();
        // corner of the cube goes before the center region
        let corner = *out.get(1, 1, 1).unwrap();
        assert!(corner >= 1 && corner < SURVIVOR_MARK);
        // survivors carry the sentinel
        for (m, &v) in out.data().iter().zip(g.data()) {
            if v != 0 {
                assert_eq!(*m, SURVIVOR_MARK);
            }
        }
    }

    #[test]
    fn removal_step_map_rejects_inhibit_and_bad_extents() {
        let mut g = solid_cube(3, 1);
        let mut out = Grid3::new_fill(5, 5, 5, 0u32);
        let inh = Grid3::new_fill(5, 5, 5, 0u8);
        assert_eq!(
            removal_step_map(&mut g, Some(&inh), &mut out),
            Err(Error::InhibitUnsupported)
        );
        let mut small = Grid3::new_fill(4, 5, 5, 0u32);
        assert_eq!(
            removal_step_map(&mut g, None, &mut small),
            Err(Error::ExtentsMismatch)
        );
    }

    #[test]
    fn lifetime_map_marks_survivors_infinite() {
        let mut g = solid_cube(5, 1);
        let mut out = Grid3::new_fill(7, 7, 7, 0f32);
        curve_lifetime_map(&mut g, &mut out).unwrap();
        for (l, &v) in out.data().iter().zip(g.data()) {
            if v != 0 {
                assert!(l.is_infinite());
            } else {
                assert!(l.is_finite());
            }
        }
    }

    #[test]
    fn zero_persistence_behaves_like_plain_isthmus_thinning() {
        // with persistence 0 every isthmus is inhibited the step it is born
        let mut g = solid_cube(5, 1);
        curve_symmetric_persistent(&mut g, None, 0, None).unwrap();
        assert!(object_len(&g) > 0);
    }

    #[test]
    fn directional_thinning_terminates_on_a_cube() {
        let mut g = solid_cube(5, 1);
        ultimate_directional(&mut g, None, None).unwrap();
        assert!(object_len(&g) > 0);
        assert!(object_len(&g) < 125);
    }
}
