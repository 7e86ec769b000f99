#![no_main]

use libfuzzer_sys::fuzz_target;

use treenav::{RenderContext, SideNav, SideNavBar, SidebarConfig};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Anything that parses must also render without panicking
        if let Ok(config) = SidebarConfig::from_yaml(content) {
            let mut ctx = RenderContext::default().with_current_url("/fuzz");
            if let Ok(menu) = SideNav::new(config.menu).render(&mut ctx) {
                let _ = SideNavBar::from_config(config.brand.unwrap_or_default())
                    .render(&menu, &mut ctx);
            }
        }
    }
});
