use bookreview_frontend::App;
use bookreview_frontend::config::AppConfig;
use leptos::prelude::*;

// Use lol_alloc as the global allocator for smaller WASM size
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

pub fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    // 重复初始化只会返回错误，忽略即可
    let _ = console_log::init_with_level(config.log_level);
    log::info!("book review client starting (api: {})", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
