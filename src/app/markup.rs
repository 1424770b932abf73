use crate::config::BrandConfig;
use crate::domain::model::Page;
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const MAIN_CLASS: &str = "max-w-6xl mx-auto px-6 py-12";
pub const SECTION_CLASS: &str = "my-12";
pub const CARD_CLASS: &str = "p-4 bg-white border rounded shadow";

/// Full document around the header, an optional main area and the footer.
pub fn document(brand: &BrandConfig, header: Markup, main: Option<Markup>, footer: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (brand.name) }
            }
            body {
                div class="min-h-screen font-sans bg-white text-gray-900" {
                    (header)
                    @if let Some(main) = main {
                        (main)
                    }
                    (footer)
                }
            }
        }
    }
}

pub fn logo(brand: &BrandConfig) -> Markup {
    html! {
        div aria-hidden="false" {
            svg width="140" height="40" viewBox="0 0 280 80" fill="none"
                xmlns="http://www.w3.org/2000/svg" role="img"
                aria-label={ (brand.name) " logo" } {
                rect width="280" height="80" rx="12" fill="white" {}
                g transform="translate(14,10)" {
                    circle cx="18" cy="18" r="16" fill=(brand.secondary) {}
                    path d="M6 30 L30 6" stroke=(brand.primary) stroke-width="3" stroke-linecap="round" {}
                    text x="56" y="28" fill=(brand.primary) font-weight="700" font-size="20" {
                        (brand.wordmark())
                    }
                    text x="56" y="48" fill="#4B5563" font-weight="600" font-size="12" {
                        (brand.tagline())
                    }
                }
            }
        }
    }
}

fn nav_link(page: Page, class: &str) -> Markup {
    html! {
        a href={ "#" (page.route_path()) } class=(class) { (page.nav_label()) }
    }
}

pub fn header(brand: &BrandConfig, menu_open: bool) -> Markup {
    html! {
        header class="w-full border-b border-gray-200 bg-white" {
            div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between" {
                div class="flex items-center gap-4" {
                    a href="#/" { (logo(brand)) }
                }
                nav class="hidden md:flex gap-6 items-center text-sm font-medium" {
                    @for page in Page::ALL {
                        (nav_link(page, "text-slate-700 hover:text-slate-900"))
                    }
                    a href="#/contact" class="text-white px-3 py-2 rounded-md ml-2"
                        style={ "background:" (brand.primary) } { "Ship Now" }
                }
                div class="md:hidden" {
                    button aria-label="menu" aria-expanded=(if menu_open { "true" } else { "false" }) class="p-2 rounded-md border" {
                        (PreEscaped("&#9776;"))
                    }
                    @if menu_open {
                        div class="absolute right-4 mt-2 bg-white border rounded shadow p-4" {
                            @for page in Page::ALL {
                                (nav_link(page, "block py-1"))
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn footer(brand: &BrandConfig, year: i32) -> Markup {
    let mailto = format!("mailto:{}", brand.support_email);
    html! {
        footer class="w-full border-t border-gray-200 mt-16 bg-white" {
            div class="max-w-6xl mx-auto px-6 py-8 grid md:grid-cols-3 gap-6" {
                div {
                    (logo(brand))
                    p class="text-sm text-gray-600 mt-2" { "Trusted freight forwarding to Nigeria." }
                }
                div {
                    h4 class="font-semibold" { "Services" }
                    ul class="text-sm text-gray-600 mt-2 list-inside" {
                        li { "Air & Sea Freight" }
                        li { "Consolidation" }
                        li { "Customs Clearance" }
                    }
                }
                div {
                    h4 class="font-semibold" { "Contact" }
                    p class="text-sm text-gray-600 mt-2" {
                        "Email: " a href=(mailto) { (brand.support_email) }
                    }
                    p class="text-sm text-gray-600 mt-2" { "© " (year) " " (brand.name) }
                }
            }
        }
    }
}

/// Inline status line next to a form's submit button.
pub fn status_line(message: Option<&str>, is_error: bool, is_success: bool) -> Markup {
    let class = if is_error {
        "text-red-600"
    } else if is_success {
        "text-green-600"
    } else {
        ""
    };
    html! {
        @if let Some(message) = message {
            span class=(class) role="status" { (message) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_shows_year_and_escaped_brand() {
        let brand = BrandConfig {
            name: "Ship <Fast> Co".to_string(),
            ..BrandConfig::default()
        };
        let html = footer(&brand, 2031).into_string();
        assert!(html.contains("© 2031 Ship &lt;Fast&gt; Co"));
        assert!(html.contains("mailto:support@qualitylogistix.com"));
    }

    #[test]
    fn test_header_lists_every_page_once_when_menu_closed() {
        let html = header(&BrandConfig::default(), false).into_string();
        for page in Page::ALL {
            let link = format!("href=\"#{}\"", page.route_path());
            assert!(html.contains(&link), "missing {}", link);
        }
        assert_eq!(html.matches(">Services</a>").count(), 1);
        assert!(html.contains("Ship Now"));
    }

    #[test]
    fn test_open_menu_repeats_links() {
        let html = header(&BrandConfig::default(), true).into_string();
        assert_eq!(html.matches(">Services</a>").count(), 2);
        assert!(html.contains("aria-expanded=\"true\""));
    }
}
