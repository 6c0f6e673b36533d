use leptos::{either::EitherOf4, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Hexagon,
}

struct Shape {
    id: u32,
    kind: ShapeKind,
    size: &'static str,
    color: &'static str,
    left: u32,
    top: u32,
    duration_s: u32,
}

const SHAPES: [Shape; 6] = [
    Shape { id: 1, kind: ShapeKind::Circle, size: "w-20 h-20", color: "bg-blue-500/10", left: 10, top: 20, duration_s: 20 },
    Shape { id: 2, kind: ShapeKind::Square, size: "w-16 h-16", color: "bg-blue-400/15", left: 80, top: 30, duration_s: 25 },
    Shape { id: 3, kind: ShapeKind::Triangle, size: "w-12 h-12", color: "bg-blue-300/20", left: 20, top: 70, duration_s: 18 },
    Shape { id: 4, kind: ShapeKind::Circle, size: "w-8 h-8", color: "bg-blue-600/25", left: 70, top: 60, duration_s: 22 },
    Shape { id: 5, kind: ShapeKind::Hexagon, size: "w-14 h-14", color: "bg-blue-500/12", left: 90, top: 80, duration_s: 28 },
    Shape { id: 6, kind: ShapeKind::Square, size: "w-10 h-10", color: "bg-blue-400/18", left: 15, top: 40, duration_s: 24 },
];

const DUST_COUNT: u32 = 8;

/// Cheap integer hash spreading `index` over `0..modulo`. Positions only need
/// to look scattered and stay stable between renders.
fn scatter(index: u32, salt: u32, modulo: u32) -> u32 {
    let mut x = index.wrapping_add(1).wrapping_mul(0x9E37_79B9) ^ salt.wrapping_mul(0x85EB_CA6B);
    x ^= x >> 15;
    x = x.wrapping_mul(0xC2B2_AE35);
    x ^= x >> 13;
    x % modulo
}

fn shape_element(shape: &Shape) -> impl IntoView {
    let base = format!("{} {} absolute", shape.size, shape.color);
    match shape.kind {
        ShapeKind::Circle => EitherOf4::A(view! { <div class=format!("{base} rounded-full")></div> }),
        ShapeKind::Square => EitherOf4::B(view! { <div class=format!("{base} rounded-lg rotate-45")></div> }),
        ShapeKind::Triangle => EitherOf4::C(view! {
            <div
                class=format!("{base} bg-transparent")
                style="width: 0; height: 0; border-left: 24px solid transparent; border-right: 24px solid transparent; border-bottom: 48px solid rgba(59, 130, 246, 0.2);"
            ></div>
        }),
        ShapeKind::Hexagon => EitherOf4::D(view! {
            <div class=format!("{base} bg-transparent")>
                <div
                    class="w-full h-full"
                    style="background: rgba(59, 130, 246, 0.12); clip-path: polygon(50% 0%, 100% 25%, 100% 75%, 50% 100%, 0% 75%, 0% 25%);"
                ></div>
            </div>
        }),
    }
}

/// Decorative drifting shapes behind the hero. Rendered only in the browser.
#[component]
pub fn FloatingShapes() -> impl IntoView {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));

    move || {
        mounted.get().then(|| {
            let shapes = SHAPES
                .iter()
                .map(|shape| {
                    let style = format!(
                        "left: {}%; top: {}%; animation: float-drift {}s ease-in-out {}s infinite;",
                        shape.left,
                        shape.top,
                        shape.duration_s,
                        shape.id * 2,
                    );
                    view! { <div class="absolute" style=style>{shape_element(shape)}</div> }
                })
                .collect_view();
            let dust = (0..DUST_COUNT)
                .map(|i| {
                    let style = format!(
                        "left: {}%; top: {}%; --dx: {}px; --dy: {}px; animation: float-twinkle {}s ease-in-out {}ms infinite alternate;",
                        scatter(i, 1, 100),
                        scatter(i, 2, 100),
                        scatter(i, 3, 200) as i32 - 100,
                        scatter(i, 4, 200) as i32 - 100,
                        15 + scatter(i, 5, 10),
                        i * 1500,
                    );
                    view! { <div class="absolute w-2 h-2 bg-blue-500/30 rounded-full" style=style></div> }
                })
                .collect_view();
            view! {
                <div class="absolute inset-0 overflow-hidden pointer-events-none">{shapes} {dust}</div>
            }
        })
    }
}
