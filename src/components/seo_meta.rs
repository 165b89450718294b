//! SEO Meta Component
//!
//! Document title, description and Organization structured data.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use serde::Serialize;

use crate::content::{COMPANY_NAME, SERVICES, SITE_DESCRIPTION, SITE_URL};
use crate::error::SiteError;

#[derive(Serialize)]
struct OfferLd {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
struct OrganizationLd {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    url: &'static str,
    description: &'static str,
    #[serde(rename = "makesOffer")]
    makes_offer: Vec<OfferLd>,
}

/// JSON-LD describing the company and its services
pub fn organization_json_ld() -> Result<String, SiteError> {
    let org = OrganizationLd {
        context: "https://schema.org",
        kind: "Organization",
        name: "Airavata Technologies",
        url: SITE_URL,
        description: SITE_DESCRIPTION,
        makes_offer: SERVICES
            .iter()
            .map(|s| OfferLd { kind: "Service", name: s.title, description: s.description })
            .collect(),
    };
    Ok(serde_json::to_string(&org)?)
}

#[component]
pub fn SeoMeta() -> impl IntoView {
    let json_ld = match organization_json_ld() {
        Ok(json) => Some(json),
        Err(err) => {
            log::error!("[SEO] {}", err);
            None
        }
    };

    view! {
        <Title text=format!("{} | Software, Web & Mobile Development", COMPANY_NAME) />
        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=SITE_URL />
        <Meta property="og:description" content=SITE_DESCRIPTION />
        {json_ld.map(|json| view! { <script type="application/ld+json" inner_html=json></script> })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_ld_lists_every_service() {
        let json = organization_json_ld().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Organization");
        let offers = value["makesOffer"].as_array().unwrap();
        assert_eq!(offers.len(), SERVICES.len());
        assert_eq!(offers[0]["name"], SERVICES[0].title);
        assert_eq!(offers[0]["@type"], "Service");
    }
}
