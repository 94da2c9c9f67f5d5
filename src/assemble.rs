//! Link assembly for Linkgen.
//!
//! This module exposes `assemble_link`, a pure function from a `LinkRequest`
//! to either the finished link or the first validation error encountered. The
//! checks run in a fixed order and short-circuit:
//!
//! 1. product and entity must both be selected;
//! 2. campaign fields are all-or-nothing;
//! 3. a filled campaign tag must start with `LK-`.
//!
//! Links are returned without a scheme (`signup.aiesec.lk/...`), the form users
//! paste into marketing material. `with_scheme` adds `https://` when a fully
//! qualified URL is wanted.

use tracing::debug;

use crate::catalog::{CAMPAIGN_TAG_PREFIX, Entity, PlatformType, Product};
use crate::error::LinkError;

/// The five campaign tracking values. An empty string means "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignFields {
    pub tag: String,
    pub source: String,
    pub medium: String,
    pub term: String,
    pub content: String,
}

impl CampaignFields {
    /// `(query parameter, value)` pairs in the order they appear in a link.
    fn params(&self) -> [(&'static str, &str); 5] {
        [
            ("campaign_tag", self.tag.as_str()),
            ("campaign_source_id", self.source.as_str()),
            ("campaign_medium_id", self.medium.as_str()),
            ("campaign_term", self.term.as_str()),
            ("campaign_content", self.content.as_str()),
        ]
    }

    /// Number of fields holding a non-empty value.
    pub fn filled_count(&self) -> usize {
        self.params().iter().filter(|(_, v)| !v.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }
}

/// One generate action's worth of selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkRequest {
    pub platform_type: PlatformType,
    pub product: Option<Product>,
    pub entity: Option<Entity>,
    pub campaign: CampaignFields,
}

/// Validate `request` and build the link.
///
/// Returns the first failing check as a `LinkError`; no partial link is ever
/// returned. Campaign values are percent-encoded, the entity key is not (keys
/// are fixed ASCII).
pub fn assemble_link(request: LinkRequest) -> Result<String, LinkError> {
    let (Some(product), Some(entity)) = (request.product, request.entity) else {
        debug!("rejecting request without product or entity");
        return Err(LinkError::MissingRequiredField);
    };

    let platform = request.platform_type;
    let mut link = format!(
        "{}/{}?{}={}",
        platform.host(),
        product.slug(platform),
        platform.entity_param(),
        entity.key()
    );

    let campaign = &request.campaign;
    if !campaign.is_empty() {
        let filled = campaign.filled_count();
        if filled != 5 {
            debug!(filled, "rejecting partially filled campaign fields");
            return Err(LinkError::IncompleteCampaignFields);
        }
        if !campaign.tag.starts_with(CAMPAIGN_TAG_PREFIX) {
            debug!(tag = %campaign.tag, "rejecting campaign tag without prefix");
            return Err(LinkError::InvalidCampaignTagPrefix);
        }
        for (key, value) in campaign.params() {
            link.push('&');
            link.push_str(key);
            link.push('=');
            link.push_str(&encode_component(value));
        }
    }

    debug!(%link, "assembled link");
    Ok(link)
}

/// Marks `urlencoding` escapes but a query component may carry bare.
const BARE_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%2A", "*"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
];

/// Percent-encode `value` for a query string, leaving alphanumerics and the
/// unreserved marks `-_.!~*'()` as they are.
fn encode_component(value: &str) -> String {
    let mut encoded = urlencoding::encode(value).into_owned();
    for (escaped, mark) in BARE_MARKS {
        if encoded.contains(escaped) {
            encoded = encoded.replace(escaped, mark);
        }
    }
    encoded
}

/// Prefix `link` with `https://` unless it already carries a scheme.
pub fn with_scheme(link: &str) -> String {
    if link.starts_with("https://") || link.starts_with("http://") {
        link.to_owned()
    } else {
        format!("https://{}", link)
    }
}
