//! # Quote Form Controller
//!
//! Glues the form model to pricing, validation, the quote store and the
//! navigation query string.
//!
//! # Flow
//!
//! ```text
//! edit ──→ model ──→ total_price()        (recomputed on read)
//!            │
//!            └──→ QuerySync::publish      (only while idle)
//!
//! params changed ──→ ApplyingInbound ──→ model = decode(params) ──→ Idle
//!
//! submit ──→ validate ──→ store.create ──→ reset model ──→ publish defaults
//! ```

use crate::application::error::{ApplicationError, ApplicationResult, ValidationErrors};
use crate::application::form::model::FormModel;
use crate::application::form::params_codec;
use crate::application::form::sync::{QuerySync, SyncState};
use crate::application::form::validation::FormValidator;
use crate::application::services::quote_store::QuoteStore;
use crate::config::AppConfig;
use crate::domain::entities::quote::NewQuote;
use crate::domain::services::pricing::PricingEngine;
use crate::domain::value_objects::{Price, QueryParams, QuoteId, WebsiteConfig};
use crate::infrastructure::navigation::Navigator;
use std::sync::Arc;
use tracing::{debug, warn};

/// Controller behind the quote form.
#[derive(Debug)]
pub struct QuoteFormController {
    model: FormModel,
    pricing: PricingEngine,
    validator: FormValidator,
    store: QuoteStore,
    sync: QuerySync,
    just_reset: bool,
}

impl QuoteFormController {
    /// Creates a controller and loads the form from the navigator's current
    /// parameters.
    #[must_use]
    pub fn new(
        store: QuoteStore,
        pricing: PricingEngine,
        validator: FormValidator,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let initial = navigator.current_params();
        let mut controller = Self {
            model: FormModel::default(),
            pricing,
            validator,
            store,
            sync: QuerySync::new(navigator),
            just_reset: false,
        };
        controller.on_params_changed(&initial);
        controller
    }

    /// Creates a controller using the rates and limits of `config`.
    #[must_use]
    pub fn from_config(config: &AppConfig, store: QuoteStore, navigator: Arc<dyn Navigator>) -> Self {
        Self::new(
            store,
            PricingEngine::new(config.pricing),
            FormValidator::new(config.validation),
            navigator,
        )
    }

    /// Current form contents.
    #[must_use]
    pub fn model(&self) -> &FormModel {
        &self.model
    }

    /// The store quotes are submitted to.
    #[must_use]
    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    /// Current synchronisation state.
    #[must_use]
    pub fn sync_state(&self) -> SyncState {
        self.sync.state()
    }

    /// True from a successful submit until the next field interaction.
    #[must_use]
    pub fn form_just_reset(&self) -> bool {
        self.just_reset
    }

    /// Price of the form as it stands.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.pricing.total_price(
            self.model.services(),
            self.model.web_config.pages,
            self.model.web_config.languages,
        )
    }

    /// Every failing field check.
    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        self.validator.validate(&self.model)
    }

    /// Returns true if the form can be submitted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Applies a user edit and publishes the result.
    ///
    /// Edits that leave the form unchanged publish nothing.
    pub fn edit(&mut self, change: impl FnOnce(&mut FormModel)) {
        self.just_reset = false;

        let mut next = self.model.clone();
        change(&mut next);
        if next == self.model {
            return;
        }
        self.commit(next);
    }

    /// Rebuilds the form from changed navigation parameters.
    ///
    /// Never writes back to the navigator.
    pub fn on_params_changed(&mut self, params: &QueryParams) {
        if !self.sync.transition(SyncState::ApplyingInbound) {
            return;
        }
        self.commit(params_codec::decode(params));
        self.sync.transition(SyncState::Idle);
    }

    /// Validates, prices and stores the form, then clears it.
    ///
    /// On failure nothing changes: no quote is stored, the form keeps its
    /// contents and the navigator is not written.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Validation` if any field check fails
    /// - `ApplicationError::Repository` if the store rejects the quote
    pub fn submit(&mut self) -> ApplicationResult<QuoteId> {
        let errors = self.validate();
        if !errors.is_empty() {
            warn!(error_count = errors.len(), "quote submission rejected");
            return Err(ApplicationError::Validation(errors));
        }

        let web_config =
            WebsiteConfig::new(self.model.web_config.pages, self.model.web_config.languages)?;
        let id = self.store.create(NewQuote {
            client_name: self.model.client_name.clone(),
            phone: self.model.phone.clone(),
            email: self.model.email.clone(),
            services: self.model.services(),
            web_config,
            total_price: self.total_price(),
        })?;

        self.reset();
        Ok(id)
    }

    fn reset(&mut self) {
        debug!("resetting quote form");
        self.just_reset = true;
        self.commit(FormModel::default());
    }

    fn commit(&mut self, model: FormModel) {
        self.model = model;
        self.sync.publish(&self.model);
    }
}
