/// Page stylesheet, injected once at the top of the app.
#[must_use]
pub fn app_css() -> &'static str {
    concat!(
        "body{margin:0;background:#1b1f24;color:#f1f1f1;font-family:system-ui,sans-serif}",
        ".app{max-width:1100px;margin:0 auto;padding:2rem 1rem;text-align:center}",
        ".sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap}",
        ".options-container{margin-bottom:1.5rem}",
        ".country-select select{min-width:18rem;padding:.5rem;border-radius:.4rem}",
        ".country-select__chips{display:flex;flex-wrap:wrap;gap:.4rem;justify-content:center;list-style:none;padding:0}",
        ".chip{background:#2c333b;border-radius:1rem;padding:.2rem .4rem .2rem .8rem}",
        ".chip__remove{background:none;border:0;color:inherit;cursor:pointer}",
        ".btn{padding:.6rem 1.4rem;border-radius:.4rem;border:0;cursor:pointer;font-size:1rem}",
        ".btn-primary{background:#0d6efd;color:#fff}",
        ".stage{display:grid;grid-template-columns:repeat(auto-fit,minmax(320px,1fr));gap:1.5rem;padding:2rem 0}",
        ".card{background:#11151a;border-radius:1rem;box-shadow:0 10px 30px rgba(0,0,0,.4);overflow:hidden;padding:1rem}",
        ".wheel{position:relative;width:308px;margin:0 auto}",
        ".wheel__pointer{position:absolute;top:-6px;left:50%;transform:translateX(-50%);border:12px solid transparent;border-top:22px solid #d62828;z-index:1}",
        ".map-view{margin:0}",
        ".map-view__frame{position:relative;overflow:hidden;max-width:100%;margin:0 auto}",
        ".map-view__tile{position:absolute}",
        ".map-view__pin{position:absolute}",
        ".map-view__attribution{font-size:.75rem;text-align:right}",
        ".map-view__attribution a{color:#9ec5fe}",
        ".itinerary{text-align:left;margin-top:2rem}",
        ".itinerary__days{list-style:none;padding:0}",
        ".itinerary__day{background:#11151a;border-radius:.6rem;padding:.8rem 1rem;margin-bottom:.8rem}",
        ".notice-tray{position:fixed;bottom:1rem;right:1rem;display:flex;flex-direction:column-reverse;gap:.5rem;z-index:10}",
        ".notice{min-width:16rem;padding:.6rem .9rem;border-radius:.4rem;cursor:pointer;text-align:left}",
        ".notice--warning{background:#ffc107;color:#212529}",
        ".confetti{position:fixed;inset:0;pointer-events:none;overflow:hidden;z-index:5}",
        ".confetti__piece{position:absolute;display:block}",
    )
}
