use crate::app::markup::{status_line, CARD_CLASS, MAIN_CLASS, SECTION_CLASS};
use crate::config::BrandConfig;
use crate::core::forms::{ContactInput, TrackInput};
use crate::domain::model::{PackageType, Page, SubmissionStatus};
use maud::{html, Markup};

/// What a mounted form shows: its current inputs and submission status.
#[derive(Debug, Clone)]
pub struct FormView<I> {
    pub input: I,
    pub status: SubmissionStatus,
    pub message: Option<&'static str>,
}

pub struct PageContext<'a> {
    pub brand: &'a BrandConfig,
    pub contact: Option<FormView<ContactInput>>,
    pub track: Option<FormView<TrackInput>>,
}

pub fn render_page(page: Page, ctx: &PageContext<'_>) -> Markup {
    match page {
        Page::Home => home(ctx.brand),
        Page::About => about(ctx.brand),
        Page::Services => services(),
        Page::Track => track(ctx.track.as_ref()),
        Page::Contact => contact(ctx.brand, ctx.contact.as_ref()),
    }
}

fn feature(title: &str, body: &str) -> Markup {
    html! {
        div class="p-4" {
            div class="p-6 rounded-lg border bg-white h-full" {
                h3 class="font-semibold text-lg" { (title) }
                p class="mt-2 text-sm text-gray-600" { (body) }
            }
        }
    }
}

fn card(title: &str, body: &str) -> Markup {
    html! {
        div class=(CARD_CLASS) {
            h3 class="font-semibold" { (title) }
            p class="text-sm text-gray-600 mt-2" { (body) }
        }
    }
}

fn hero(brand: &BrandConfig) -> Markup {
    let background = format!(
        "background: linear-gradient(90deg, {} 0%, {} 100%)",
        brand.primary, brand.secondary
    );
    html! {
        section class="rounded-lg overflow-hidden mb-8" style=(background) {
            div class="max-w-6xl mx-auto px-6 py-20 text-white flex flex-col md:flex-row items-center gap-10" {
                div {
                    h1 class="text-3xl md:text-4xl font-extrabold leading-tight" {
                        "Fast. Secure. Reliable Shipping to Nigeria."
                    }
                    p class="mt-4 text-md max-w-xl" {
                        (brand.name) " connects the world to Nigeria with seamless freight forwarding, "
                        "package consolidation, and reliable delivery you can trust."
                    }
                    div class="mt-6 flex gap-4" {
                        a href="#/contact" class="px-5 py-3 bg-white rounded-md font-semibold" { "Ship Now" }
                        a href="#/track" class="px-5 py-3 border border-white rounded-md text-white" { "Track a Package" }
                    }
                }
            }
        }
    }
}

fn home(brand: &BrandConfig) -> Markup {
    html! {
        main class=(MAIN_CLASS) data-page="home" {
            (hero(brand))
            section class=(SECTION_CLASS) {
                div class="grid grid-cols-1 md:grid-cols-3 gap-6" {
                    (feature("Hassle-free Shipping", "We manage pickup, consolidation, documentation and delivery so you can focus on your business."))
                    (feature("Affordable Rates", "Consolidation and flexible air/sea freight options to suit budgets."))
                    (feature("Customs Support", "We handle paperwork and clearance to minimize delays at arrival."))
                }
            }
            section class=(SECTION_CLASS) {
                div class="grid md:grid-cols-2 items-center gap-8" {
                    div {
                        h2 class="text-2xl font-bold" { "How it works" }
                        ol class="mt-4 list-decimal list-inside text-gray-700" {
                            li { "Request a shipping quote or send an inquiry." }
                            li { "Choose pickup or drop-off; we consolidate packages weekly." }
                            li { "Track shipment and receive delivery in Nigeria." }
                        }
                        div class="mt-6" {
                            a href="#/contact" class="px-4 py-2 rounded" { "Send Inquiry" }
                        }
                    }
                    div class=(CARD_CLASS) {
                        h3 class="font-semibold" { "Quick Quote" }
                        p class="text-sm text-slate-600" {
                            "Tell us origin, destination and approximate weight. We'll reply with options."
                        }
                        form class="mt-4 space-y-3" data-form="quick-quote" {
                            input name="origin" placeholder="Origin country" class="p-2 border rounded w-full";
                            input name="destination" placeholder="Destination city (Nigeria)" class="p-2 border rounded w-full";
                            input name="weight" placeholder="Est. weight (kg)" class="p-2 border rounded w-full";
                            button class="px-4 py-2 rounded" { "Get Quote" }
                        }
                    }
                }
            }
        }
    }
}

fn about(brand: &BrandConfig) -> Markup {
    let mailto = format!("mailto:{}", brand.support_email);
    html! {
        main class=(MAIN_CLASS) data-page="about" {
            section class=(SECTION_CLASS) {
                h2 class="text-2xl font-bold" { "About " (brand.name) }
                p class="mt-4 text-gray-700 max-w-3xl" {
                    (brand.name) " is a global freight forwarding company focused on shipping packages to Nigeria "
                    "with speed, transparency, and reliability. We support families and businesses with air and "
                    "sea freight options, package consolidation, and customs guidance to reduce cost and transit time."
                }
                div class="mt-6 grid md:grid-cols-3 gap-4" {
                    (card("Our Mission", "To create a seamless and trusted shipping bridge between the world and Nigeria."))
                    div class=(CARD_CLASS) {
                        h4 class="font-semibold" { "Our Values" }
                        ul class="text-sm text-gray-600 mt-2 list-disc list-inside" {
                            @for value in ["Reliability", "Transparency", "Speed", "Customer-First"] {
                                li { (value) }
                            }
                        }
                    }
                    div class=(CARD_CLASS) {
                        h4 class="font-semibold" { "Support" }
                        p class="text-sm text-gray-600 mt-2" {
                            "Email: " a href=(mailto) { (brand.support_email) }
                        }
                    }
                }
            }
        }
    }
}

fn services() -> Markup {
    html! {
        main class=(MAIN_CLASS) data-page="services" {
            section class=(SECTION_CLASS) {
                h2 class="text-2xl font-bold" { "Services" }
                div class="mt-6 grid md:grid-cols-2 gap-6" {
                    (card("International Freight Forwarding", "We ship packages worldwide to Nigeria with air and sea routing."))
                    (card("Package Consolidation", "Combine multiple packages to reduce per-shipment costs."))
                    (card("Customs & Clearance", "We assist with documentation, duties and compliance to avoid delays."))
                    (card("Real-Time Updates", "Receive tracking updates and customer support during transit."))
                }
            }
        }
    }
}

fn form_status(view: Option<&FormView<impl Sized>>) -> Markup {
    match view {
        Some(view) => status_line(
            view.message,
            view.status == SubmissionStatus::Error,
            view.status == SubmissionStatus::Success,
        ),
        None => html! {},
    }
}

fn track(view: Option<&FormView<TrackInput>>) -> Markup {
    let input = view.map(|v| v.input.clone()).unwrap_or_default();
    html! {
        main class=(MAIN_CLASS) data-page="track" {
            section class=(SECTION_CLASS) {
                h2 class="text-2xl font-bold" { "Track Shipment" }
                p class="mt-2 text-gray-700" { "Enter your tracking number and email to get the latest status." }
                div class="mt-6" {
                    form method="post" class="space-y-4 max-w-xl" data-form="track" {
                        input name="fullName" placeholder="Full name" value=(input.full_name) class="p-3 border rounded w-full";
                        input name="email" type="email" placeholder="Email (to receive updates)" value=(input.email) class="p-3 border rounded w-full";
                        input name="trackingNumber" required placeholder="Tracking number" value=(input.tracking_number) class="p-3 border rounded w-full";
                        div class="flex items-center gap-4" {
                            button type="submit" class="px-4 py-2 rounded" { "Get Status" }
                            (form_status(view))
                        }
                    }
                }
            }
        }
    }
}

fn contact(brand: &BrandConfig, view: Option<&FormView<ContactInput>>) -> Markup {
    let input = view.map(|v| v.input.clone()).unwrap_or_default();
    html! {
        main class=(MAIN_CLASS) data-page="contact" {
            section class=(SECTION_CLASS) {
                h2 class="text-2xl font-bold" { "Contact Us" }
                p class="mt-2 text-gray-700" {
                    "We’re here to help move your packages across borders. Response time: 24–48 hours."
                }
                div class="mt-6 grid md:grid-cols-2 gap-8" {
                    div class=(CARD_CLASS) {
                        h3 class="font-semibold" { "Email" }
                        p class="text-sm text-gray-600 mt-2" { (brand.support_email) }
                        h3 class="font-semibold mt-4" { "Pickup / Partner Locations" }
                        p class="text-sm text-gray-600 mt-2" { "USA • UK • Canada • Nigeria" }
                    }
                    div class=(CARD_CLASS) {
                        form method="post" class="space-y-4" data-form="contact" {
                            div class="grid grid-cols-1 md:grid-cols-2 gap-4" {
                                input name="fullName" required placeholder="Full name" value=(input.full_name) class="p-3 border rounded";
                                input name="email" required type="email" placeholder="Email" value=(input.email) class="p-3 border rounded";
                            }
                            div class="grid grid-cols-1 md:grid-cols-2 gap-4" {
                                input name="origin" placeholder="Origin country" value=(input.origin) class="p-3 border rounded";
                                input name="destination" placeholder="Destination city (Nigeria)" value=(input.destination) class="p-3 border rounded";
                            }
                            div {
                                select name="packageType" class="p-3 border rounded w-full" {
                                    @for option in PackageType::ALL {
                                        option selected[option == input.package_type] { (option.label()) }
                                    }
                                }
                            }
                            div {
                                textarea name="message" rows="4" placeholder="Tell us about your shipment (optional)" class="p-3 border rounded w-full" {
                                    (input.message)
                                }
                            }
                            div class="flex items-center gap-4" {
                                button type="submit" class="px-4 py-2 rounded text-white" { "Send Inquiry" }
                                (form_status(view))
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(brand: &BrandConfig) -> PageContext<'_> {
        PageContext {
            brand,
            contact: None,
            track: None,
        }
    }

    #[test]
    fn test_each_page_renders_its_marker() {
        let brand = BrandConfig::default();
        for page in Page::ALL {
            let html = render_page(page, &ctx(&brand)).into_string();
            let marker = format!("data-page=\"{}\"", page.slug().replace("index", "home"));
            assert!(html.contains(&marker), "{:?} missing {}", page, marker);
            assert_eq!(html.matches("data-page=").count(), 1);
        }
    }

    #[test]
    fn test_track_keeps_entered_values_and_status() {
        let brand = BrandConfig::default();
        let mut context = ctx(&brand);
        context.track = Some(FormView {
            input: TrackInput {
                tracking_number: "QLX-<42>".to_string(),
                ..TrackInput::default()
            },
            status: SubmissionStatus::Error,
            message: Some("Error — try again later."),
        });

        let html = render_page(Page::Track, &context).into_string();
        assert!(html.contains("value=\"QLX-&lt;42&gt;\""));
        assert!(html.contains("text-red-600"));
        assert!(html.contains("Error — try again later."));
    }

    #[test]
    fn test_contact_marks_selected_package_type() {
        let brand = BrandConfig::default();
        let mut context = ctx(&brand);
        context.contact = Some(FormView {
            input: ContactInput {
                package_type: PackageType::Electronics,
                ..ContactInput::default()
            },
            status: SubmissionStatus::Idle,
            message: None,
        });

        let html = render_page(Page::Contact, &context).into_string();
        assert!(html.contains("<option selected>Electronics</option>"));
        assert!(html.contains("<option>Documents</option>"));
        assert!(!html.contains("role=\"status\""));
    }
}
