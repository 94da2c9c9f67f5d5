//! Interaction session state.
//!
//! `LinkSession` owns everything a user has selected so far plus the outcome of
//! the last generate action. Each `generate` call snapshots the selections into
//! a `LinkRequest` by value, so the assembler never sees shared state.

use tracing::info;

use crate::assemble::{CampaignFields, LinkRequest, assemble_link};
use crate::catalog::{Entity, PlatformType, Product};
use crate::error::{ClipboardError, LinkError};

/// Confirmation shown after a successful copy.
pub const COPIED_MESSAGE: &str = "Link copied to clipboard!";

#[derive(Debug, Clone, Default)]
pub struct LinkSession {
    platform_type: PlatformType,
    product: Option<Product>,
    entity: Option<Entity>,
    campaign: CampaignFields,
    generated_link: Option<String>,
    error_message: Option<String>,
}

impl LinkSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_platform_type(&mut self, platform_type: PlatformType) {
        // Product keys are shared across platforms, so the selection carries over.
        self.platform_type = platform_type;
    }

    pub fn set_product(&mut self, product: Option<Product>) {
        self.product = product;
    }

    pub fn set_entity(&mut self, entity: Option<Entity>) {
        self.entity = entity;
    }

    pub fn campaign_mut(&mut self) -> &mut CampaignFields {
        &mut self.campaign
    }

    pub fn set_campaign(&mut self, campaign: CampaignFields) {
        self.campaign = campaign;
    }

    pub fn platform_type(&self) -> PlatformType {
        self.platform_type
    }

    pub fn generated_link(&self) -> Option<&str> {
        self.generated_link.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Snapshot of the current selections.
    pub fn request(&self) -> LinkRequest {
        LinkRequest {
            platform_type: self.platform_type,
            product: self.product,
            entity: self.entity,
            campaign: self.campaign.clone(),
        }
    }

    /// Run the assembler on the current selections.
    ///
    /// On failure the previous link (if any) is kept and the error message is
    /// recorded; on success the error message is cleared.
    pub fn generate(&mut self) -> Result<&str, LinkError> {
        self.error_message = None;
        match assemble_link(self.request()) {
            Ok(link) => Ok(self.generated_link.insert(link).as_str()),
            Err(e) => {
                self.error_message = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Hand the last generated link to `copier` (normally
    /// `clipboard::copy_to_clipboard`) and return the confirmation text.
    pub fn copy_link<F>(&self, copier: F) -> Result<&'static str, ClipboardError>
    where
        F: FnOnce(&str) -> Result<(), ClipboardError>,
    {
        let link = self
            .generated_link
            .as_deref()
            .ok_or(ClipboardError::NothingToCopy)?;
        copier(link)?;
        info!("link copied to clipboard");
        Ok(COPIED_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_session() -> LinkSession {
        let mut s = LinkSession::new();
        s.set_product(Some(Product::Ogv));
        s.set_entity(Some(Entity::Cc));
        s
    }

    #[test]
    fn test_defaults() {
        let s = LinkSession::new();
        assert_eq!(s.platform_type(), PlatformType::Signups);
        assert!(s.generated_link().is_none());
        assert!(s.error_message().is_none());
    }

    #[test]
    fn test_generate_stores_link() {
        let mut s = filled_session();
        assert_eq!(s.generate().unwrap(), "signup.aiesec.lk/volunteer?ley=CC");
        assert_eq!(s.generated_link(), Some("signup.aiesec.lk/volunteer?ley=CC"));
        assert!(s.error_message().is_none());
    }

    #[test]
    fn test_failure_keeps_previous_link_and_records_message() {
        let mut s = filled_session();
        s.generate().unwrap();
        s.campaign_mut().tag = "LK-only".into();
        assert_eq!(s.generate(), Err(LinkError::IncompleteCampaignFields));
        assert_eq!(
            s.error_message(),
            Some("All campaign fields must be filled if any are filled.")
        );
        assert_eq!(s.generated_link(), Some("signup.aiesec.lk/volunteer?ley=CC"));

        s.set_campaign(CampaignFields::default());
        s.generate().unwrap();
        assert!(s.error_message().is_none());
    }

    #[test]
    fn test_platform_switch_keeps_product() {
        let mut s = LinkSession::new();
        s.set_product(Some(Product::Ogte));
        s.set_entity(Some(Entity::Cn));
        assert_eq!(s.generate().unwrap(), "signup.aiesec.lk/teach?ley=CN");
        s.set_platform_type(PlatformType::PreSignups);
        assert_eq!(s.generate().unwrap(), "apply.aiesec.lk/teacher?entity=CN");
    }

    #[test]
    fn test_missing_entity_message() {
        let mut s = LinkSession::new();
        s.set_entity(Some(Entity::Cc));
        assert_eq!(s.generate(), Err(LinkError::MissingRequiredField));
        assert_eq!(s.error_message(), Some("Product and Entity are required fields."));
    }

    #[test]
    fn test_copy_requires_link() {
        let s = LinkSession::new();
        assert_eq!(
            s.copy_link(|_| Ok(())),
            Err(ClipboardError::NothingToCopy)
        );
    }

    #[test]
    fn test_copy_passes_link_verbatim() {
        let mut s = filled_session();
        s.generate().unwrap();
        let mut copied = String::new();
        let msg = s
            .copy_link(|link| {
                copied.push_str(link);
                Ok(())
            })
            .unwrap();
        assert_eq!(msg, COPIED_MESSAGE);
        assert_eq!(copied, "signup.aiesec.lk/volunteer?ley=CC");
    }

    #[test]
    fn test_copy_failure_is_reported() {
        let mut s = filled_session();
        s.generate().unwrap();
        let err = s
            .copy_link(|_| Err(ClipboardError::Unavailable("no display".into())))
            .unwrap_err();
        assert_eq!(err.to_string(), "clipboard init: no display");
    }
}
