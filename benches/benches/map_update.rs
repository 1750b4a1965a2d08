// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::Vec3;
use kurbo::{Point, Rect};

use holdfast_map::{MapKind, VisibleCache, WidgetMap};
use holdfast_pick::{Hit, PickSurface};
use holdfast_widget::host::{CursorIcon, Shell, View};
use holdfast_widget::{Event, GroupKind, GroupWidgets, Hit2d, Modifiers, Shape, Widget, WidgetFlags};

struct BenchCtx;

impl View for BenchCtx {
    fn pixel_size_at(&self, _origin: Vec3) -> f32 {
        0.5
    }
}

impl Shell for BenchCtx {
    fn set_cursor(&mut self, _icon: CursorIcon) {}
    fn request_redraw(&mut self) {}
    fn request_pointer_refresh(&mut self) {}
}

impl PickSurface for BenchCtx {
    fn begin(&mut self, _rect: Rect) {}
    fn end(&mut self) -> Vec<Hit> {
        Vec::new()
    }
}

struct Arrow;

impl Shape<BenchCtx> for Arrow {
    fn draw(&self, _widget: &Widget<BenchCtx>, _ctx: &mut BenchCtx) {}
}

struct BoxHit {
    rect: Rect,
}

impl Hit2d<BenchCtx> for BoxHit {
    fn intersect(&self, _ctx: &BenchCtx, _widget: &Widget<BenchCtx>, event: &Event) -> u8 {
        match event.pos() {
            Some(pos) if self.rect.contains(pos) => 1,
            _ => 0,
        }
    }
}

struct Grid {
    count: usize,
}

impl GroupKind<BenchCtx> for Grid {
    fn name(&self) -> &str {
        "grid"
    }

    fn populate(&self, _ctx: &BenchCtx, group: &mut GroupWidgets<'_, BenchCtx>) {
        for i in 0..self.count {
            let mut widget = Widget::new(Arrow);
            widget.set_flags(WidgetFlags::SCALE_VIEW | WidgetFlags::SELECTABLE, true);
            let x = (i % 32) as f64 * 30.0;
            let y = (i / 32) as f64 * 30.0;
            widget.set_hit_2d(BoxHit {
                rect: Rect::new(x, y, x + 20.0, y + 20.0),
            });
            group.attach(&format!("h{i}"), widget);
        }
    }
}

fn grid_map(count: usize) -> WidgetMap<BenchCtx> {
    let mut map = WidgetMap::new(MapKind::Screen);
    map.register(Grid { count });
    map
}

fn run_cycle(map: &mut WidgetMap<BenchCtx>, ctx: &BenchCtx, cache: &mut VisibleCache) {
    cache.begin();
    map.update(ctx, cache);
    cache.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("map/update");

    for count in [16usize, 128, 1_024] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("fresh", count), &count, |b, &count| {
            let ctx = BenchCtx;
            let mut map = grid_map(count);
            let mut cache = VisibleCache::new();
            b.iter(|| run_cycle(&mut map, &ctx, &mut cache));
        });

        // A quarter of the widgets selected: every cycle pays the
        // name-keyed reconciliation on top of regeneration.
        group.bench_with_input(BenchmarkId::new("selected", count), &count, |b, &count| {
            let mut ctx = BenchCtx;
            let mut map = grid_map(count);
            let mut cache = VisibleCache::new();
            run_cycle(&mut map, &ctx, &mut cache);
            for i in (0..count).step_by(4) {
                let addr = map.locate(&format!("grid_h{i}")).unwrap();
                map.select(&mut ctx, addr);
            }
            b.iter(|| run_cycle(&mut map, &ctx, &mut cache));
        });
    }

    group.finish();
}

fn bench_pick_screen(c: &mut Criterion) {
    let mut group = c.benchmark_group("map/pick_screen");

    // Pointer over empty space: the scan visits every widget and misses.
    for count in [16usize, 128, 1_024] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut ctx = BenchCtx;
            let mut map = grid_map(count);
            let mut cache = VisibleCache::new();
            run_cycle(&mut map, &ctx, &mut cache);
            let event = Event::Motion {
                pos: Point::new(-100.0, -100.0),
                mods: Modifiers::default(),
            };
            b.iter(|| black_box(map.pick(&mut ctx, black_box(&event))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_update, bench_pick_screen);
criterion_main!(benches);
