// web_app/components/home.rs - Home page banner

use std::time::Duration;

use leptos::prelude::*;

/// Time each slide stays up before advancing
pub const SLIDE_INTERVAL: Duration = Duration::from_secs(4);

pub struct Slide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub background: &'static str,
}

pub static SLIDES: [Slide; 3] = [
    Slide {
        title: "Home Comfort",
        subtitle: "Living Room",
        description: "Upgrade your space with cozy and stylish sofas",
        background: "bg-gradient-to-r from-teal-500 to-cyan-600",
    },
    Slide {
        title: "Entertainment Hub",
        subtitle: "Smart TV",
        description: "Experience the latest in home entertainment",
        background: "bg-gradient-to-r from-rose-500 to-pink-600",
    },
    Slide {
        title: "Playful Picks",
        subtitle: "Kids' Clothing",
        description: "Bright and fun styles for kids, up to 20% off",
        background: "bg-gradient-to-r from-yellow-500 to-red-600",
    },
];

/// Move `delta` slides from `index`, wrapping in both directions
pub fn step_slide(index: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    (index as isize + delta).rem_euclid(len as isize) as usize
}

/// Rotating banner with previous/next controls
#[component]
pub fn HeroBanner() -> impl IntoView {
    let current = RwSignal::new(0_usize);
    let len = SLIDES.len();

    let advance = move |delta: isize| current.update(|i| *i = step_slide(*i, len, delta));

    // Browser only; effects never run during server rendering
    Effect::new(move |_| {
        if let Ok(handle) = set_interval_with_handle(move || advance(1), SLIDE_INTERVAL) {
            on_cleanup(move || handle.clear());
        }
    });

    view! {
        <div class="py-4 relative">
            {move || {
                let slide = &SLIDES[current.get()];
                view! {
                    <div class=format!("rounded-xl sm:h-[420px] h-[320px] overflow-hidden shadow-2xl {}", slide.background)>
                        <div class="flex flex-col items-center justify-center h-full text-center px-8">
                            <h3 class="text-3xl text-white font-extrabold tracking-tight">{slide.title}</h3>
                            <h1 class="text-5xl text-white font-bold mt-4 leading-tight">{slide.subtitle}</h1>
                            <p class="text-slate-100 text-lg mt-6 max-w-md">{slide.description}</p>
                            <a
                                href="/products"
                                class="mt-8 inline-block bg-white text-slate-900 py-3 px-6 rounded-full font-semibold \
                                       text-lg hover:bg-slate-100 transition-transform hover:scale-105"
                            >
                                "Shop"
                            </a>
                        </div>
                    </div>
                }
            }}

            <button
                type="button"
                class="absolute left-4 top-1/2 -translate-y-1/2 text-white text-3xl px-3"
                on:click=move |_| advance(-1)
            >
                "‹"
            </button>
            <button
                type="button"
                class="absolute right-4 top-1/2 -translate-y-1/2 text-white text-3xl px-3"
                on:click=move |_| advance(1)
            >
                "›"
            </button>

            <div class="flex justify-center gap-2 mt-4">
                {(0..len)
                    .map(|i| view! {
                        <button
                            type="button"
                            class=move || { if current.get() == i { "w-3 h-3 rounded-full bg-purple-600" } else { "w-3 h-3 rounded-full bg-slate-300" } }
                            on:click=move |_| current.set(i)
                        ></button>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
