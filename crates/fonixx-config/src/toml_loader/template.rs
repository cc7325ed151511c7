//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Fonixx Site Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[site]
# assets_dir = "/path/to/site"   # defaults to the bundled assets/site
# start_page = "index.html"

[window]
# title = "Fonixx Consultancy"
# width = 1280           # 320-7680
# height = 800           # 240-4320
# devtools = false

[form]
# selector = ".contact-form"
# notice_text = "✓ Thank you! We will contact you soon."
# notice_delay_ms = 5000 # 500-60000
# notice_fade_ms = 500   # 0-5000
# error_font_size = "0.875rem"
# error_margin_top = "0.25rem"

[theme]
# error = "#ff6b6b"
# notice_gradient_start = "#D4AF37"
# notice_gradient_end = "#F0D878"
# notice_text = "#000"

[nav]
# scroll_threshold = 50.0  # 0-2000 px
# open_icon = "✕"
# closed_icon = "☰"
# default_page = "index.html"

[reveal]
# enabled = true
# selectors = [".card", ".section-title", ".hero-content"]
# threshold = 0.1        # 0.0-1.0
# root_margin = "0px 0px -50px 0px"
# animation = "fadeInUp 0.8s ease forwards"

[scroll]
# behavior = "smooth"    # smooth, instant, auto
# block = "start"        # start, center, end, nearest

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
