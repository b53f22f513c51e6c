use serde::{Deserialize, Serialize};

use crate::models::{CampaignCopy, Identification, LookupResult, PriceTrend};

/// Fixed inserts for the generated copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignSettings {
    /// Contact insert for the call to action.
    pub contact: String,
    /// Home region; a market label containing it adds the local headline tag.
    pub home_region: String,
    /// Hashtags always appended for identified products.
    pub region_tags: Vec<String>,
}

impl Default for CampaignSettings {
    fn default() -> Self {
        Self {
            contact: "[Your Phone Number/WhatsApp]".to_string(),
            home_region: "Akure".to_string(),
            region_tags: vec!["#Akure".to_string(), "#OndoState".to_string()],
        }
    }
}

/// Markets with their own audience hashtag.
const MARKET_TAGS: &[(&str, &str)] = &[
    ("Shasha", "#ShashaMarket"),
    ("Erekesan", "#ErekesanMarket"),
    ("Oja Oba", "#OjaOba"),
];

/// Generate campaign copy from the identification and lookup outcome. Pure
/// string formatting over named fields; the only conditionals are the
/// recognized inserts (market present, trend present, market tags).
pub fn generate_copy(
    identification: Option<&Identification>,
    lookup: Option<&LookupResult>,
    trend: Option<&PriceTrend>,
    settings: &CampaignSettings,
) -> CampaignCopy {
    let Some(identification) = identification else {
        return generic_copy(settings);
    };

    let product = identification.label.as_str();
    let condition = identification.condition.as_deref().unwrap_or("Quality");
    let market = lookup
        .filter(|l| l.has_price())
        .and_then(|l| l.market_label.as_deref());

    let mut headline = format!("Premium {} {} - Available Now!", condition, product);
    if market.is_some_and(|m| m.contains(&settings.home_region)) {
        headline.push_str(&format!(" In {}!", settings.home_region));
    }

    let mut body = format!(
        "Looking for top {} {}? Look no further! ",
        condition.to_lowercase(),
        product
    );
    if let Some(trend) = trend {
        body.push_str(&format!(
            "Market trend shows: {}. Secure yours today! ",
            trend.remark()
        ));
    }
    body.push_str("Ideal for home use or business.");

    let mut cta = format!(
        "Order your {} now! Call/WhatsApp {}.",
        product, settings.contact
    );
    if let Some(market) = market {
        cta.push_str(&format!(" Pickup available near {}.", market));
    }

    let product_tag = format!("#{}", product.replace(' ', ""));
    let mut hashtags = vec!["#FarmFresh".to_string(), product_tag];
    hashtags.extend(settings.region_tags.iter().cloned());
    hashtags.extend(["#NaijaMade", "#Agribusiness", "#SupportLocal"].map(String::from));
    if let Some(market) = market {
        for (needle, tag) in MARKET_TAGS {
            if market.contains(needle) {
                hashtags.push(tag.to_string());
            }
        }
    }

    CampaignCopy {
        headline,
        body,
        cta,
        hashtags: hashtags.join(" "),
    }
}

fn generic_copy(settings: &CampaignSettings) -> CampaignCopy {
    CampaignCopy {
        headline: "Quality Farm Products Available!".to_string(),
        body: "Get the best farm-fresh products today.".to_string(),
        cta: format!("Contact us now to order! {}", settings.contact),
        hashtags: "#FarmFresh #NigeriaAgro #SupportLocalFarmers".to_string(),
    }
}
