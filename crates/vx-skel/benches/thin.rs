use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vx_core::Grid3;
use vx_skel::{curve_symmetric, ultimate_symmetric};

fn solid_ball(radius: i64) -> Grid3<u8> {
    let ext = (2 * radius + 3) as usize;
    let c = radius + 1;
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
    g
}

fn bench_thin(c: &mut Criterion) {
    let ball = solid_ball(12);

    c.bench_function("vx_skel_ultimate_symmetric_ball_r12", |b| {
        b.iter(|| {
            let mut g = black_box(&ball).clone();
            ultimate_symmetric(&mut g, None, None).unwrap();
            black_box(g);
        });
    });

    c.bench_function("vx_skel_curve_symmetric_ball_r12", |b| {
        b.iter(|| {
            let mut g = black_box(&ball).clone();
            curve_symmetric(&mut g, None, None).unwrap();
            black_box(g);
        });
    });
}

criterion_group!(benches, bench_thin);
criterion_main!(benches);
