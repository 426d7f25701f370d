use footer_ui::components::footer::FooterLayoutProps;
use footer_ui::content::FooterContent;
use footer_ui::utils::time::current_year;
use footer_ui::{Footer, FooterLayout, StaticFooter};
use yew::ServerRenderer;

async fn render_footer() -> String {
    ServerRenderer::<Footer>::new()
        .hydratable(false)
        .render()
        .await
}

async fn render_at(year: i16) -> String {
    ServerRenderer::<FooterLayout>::with_props(move || FooterLayoutProps {
        content: FooterContent::storefront(),
        year,
    })
    .hydratable(false)
    .render()
    .await
}

#[tokio::test]
async fn renders_three_categories_of_five_links() {
    let html = render_footer().await;
    assert_eq!(html.matches("<h3").count(), 3);
    assert_eq!(html.matches("<li>").count(), 15);
}

#[tokio::test]
async fn renders_three_social_links() {
    let html = render_footer().await;
    assert_eq!(html.matches(r#"class="sr-only""#).count(), 3);
    for social in FooterContent::storefront().socials {
        assert!(html.contains(&format!(
            r#"<span class="sr-only">{}</span>"#,
            social.name
        )));
        assert!(html.contains(&format!(r#"href="{}""#, social.href)));
    }
}

#[tokio::test]
async fn copyright_uses_current_year() {
    let html = render_footer().await;
    let expected = format!(
        "© {} Northwind Supply. All rights reserved.",
        current_year()
    );
    assert!(html.contains(&expected), "missing {expected:?}");
}

#[tokio::test]
async fn link_text_is_the_link_name() {
    let html = render_footer().await;
    for category in FooterContent::storefront().categories {
        for link in category.links {
            assert!(
                html.contains(&format!("<span>{}</span>", link.name)),
                "{}",
                link.name
            );
        }
    }
}

#[tokio::test]
async fn arrow_icons_are_hidden_from_assistive_tech() {
    let html = render_footer().await;
    let svgs = html.matches("<svg").count();
    // one per social link plus one per category link
    assert_eq!(svgs, 3 + 15);
    assert_eq!(html.matches(r#"aria-hidden="true""#).count(), svgs);
}

#[tokio::test]
async fn only_the_year_changes_between_renders() {
    let earlier = render_at(2024).await;
    let later = render_at(2031).await;
    assert_ne!(earlier, later);
    assert!(later.contains("© 2031 "));
    assert_eq!(later.replace("2031", "2024"), earlier);
}

#[tokio::test]
async fn repeated_renders_are_identical() {
    assert_eq!(render_at(2030).await, render_at(2030).await);
}

#[tokio::test]
async fn categories_render_in_order() {
    let html = render_footer().await;
    let position = |name: &str| {
        html.find(&format!(">{name}</h3>"))
            .unwrap_or_else(|| panic!("{name} heading missing"))
    };
    assert!(position("Shop") < position("Company"));
    assert!(position("Company") < position("Support"));
}

#[tokio::test]
async fn columns_and_bottom_bar_are_staggered() {
    let html = render_footer().await;
    for delay in ["0ms", "100ms", "200ms", "300ms"] {
        assert!(
            html.contains(&format!("transition-delay: {delay};")),
            "no element delayed by {delay}"
        );
    }
    // hidden until the observer fires on the client
    assert!(html.contains("opacity: 0;"));
}

#[tokio::test]
async fn static_footer_has_no_animation_styles() {
    let html = ServerRenderer::<StaticFooter>::new()
        .hydratable(false)
        .render()
        .await;
    assert!(html.contains("Northwind Supply"));
    assert!(!html.contains("style="));
    assert!(!html.contains("opacity: 0;"));
}

#[tokio::test]
async fn static_footer_reports_every_element_as_shown() {
    let html = ServerRenderer::<StaticFooter>::new()
        .hydratable(false)
        .render()
        .await;
    // brand, three socials, three columns, bottom bar
    assert_eq!(html.matches(r#"data-motion="triggered""#).count(), 8);
    assert!(!html.contains(r#"data-motion="idle""#));
}

#[tokio::test]
async fn animated_footer_starts_idle() {
    let html = render_footer().await;
    assert_eq!(html.matches(r#"data-motion="idle""#).count(), 8);
}
