use leptos::prelude::*;
use qrcode::render::svg;
use qrcode::QrCode as Code;

/// Renders `payload` as a scannable QR code in inline SVG
#[component]
pub fn QrCode(
    #[prop(into)] payload: String,
    #[prop(default = 180)] size: u32,
) -> impl IntoView {
    match Code::new(payload.as_bytes()) {
        Ok(code) => {
            let markup = code
                .render::<svg::Color>()
                .min_dimensions(size, size)
                .dark_color(svg::Color("#0f172a"))
                .light_color(svg::Color("#ffffff"))
                .build();
            view! { <div class="rounded-xl bg-white p-3 [&>svg]:w-full [&>svg]:h-auto" inner_html=markup></div> }
                .into_any()
        }
        Err(e) => {
            log::warn!("Cannot encode QR payload '{payload}': {e}");
            view! {
                <div class="rounded-xl bg-slate-200 text-slate-500 text-xs p-6 text-center">
                    "Code unavailable"
                </div>
            }
                .into_any()
        }
    }
}
