use std::sync::Arc;

use anyhow::Result;
use pk_app::PasswordToggleBinding;
use pk_core::PageConfig;
use pk_infra::MemoryPasswordField;

pub fn run(config: &PageConfig, clicks: usize) -> Result<()> {
    let field = Arc::new(MemoryPasswordField::new());
    let binding = PasswordToggleBinding::new(field.clone(), config.password, true);

    for click in 1..=clicks {
        binding.on_click();
        match field.icons() {
            Some(icons) => println!(
                "click {click}: type={} show_icon={} hide_icon={}",
                field.input_type().as_str(),
                icons.show_active,
                icons.hide_active
            ),
            None => println!("click {click}: type={}", field.input_type().as_str()),
        }
    }
    Ok(())
}
