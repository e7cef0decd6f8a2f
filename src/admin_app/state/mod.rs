use std::path::Path;
use std::sync::mpsc::{channel, Receiver};

use crate::admin_app::api::{AuthBackend, HttpApiClient};
use crate::admin_app::auth::{LoginFlow, RegisterFlow};
use crate::admin_app::catalog::{
    CatalogCommand, CatalogSnapshot, CatalogWorker, ImageUpload, Notice, ProductDraft,
};
use crate::admin_app::types::{AppView, Navigator};
use crate::shared::catalog::{CategoryId, ProductId};
use crate::shared::error::{ApiError, ValidationError};

type AuthResult = Result<String, ApiError>;

/// Text-field buffer behind the product form.
///
/// Holds the price and image path as typed; they are parsed into a
/// [`ProductDraft`] only on submit.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub draft: ProductDraft,
    pub price_input: String,
    pub image_path: String,
    revision: u64,
}

impl ProductForm {
    /// Replace the buffer with a draft published by the controller
    pub fn load(&mut self, draft: &ProductDraft) {
        self.draft = draft.clone();
        self.price_input = if draft.price == 0.0 {
            String::new()
        } else {
            draft.price.to_string()
        };
        self.image_path.clear();
        self.revision = draft.revision();
    }

    /// Whether the controller's draft was replaced since the last load
    pub fn is_stale(&self, draft: &ProductDraft) -> bool {
        self.revision != draft.revision()
    }

    pub fn toggle_category(&mut self, id: CategoryId) {
        self.draft.toggle_category(id);
    }

    /// Parse the typed values into a draft ready to submit.
    ///
    /// An empty price becomes zero and is rejected by validation; text that is
    /// not a number is rejected here.
    pub fn to_draft(&self) -> Result<ProductDraft, String> {
        let mut draft = self.draft.clone();
        let price = self.price_input.trim();
        draft.price = if price.is_empty() {
            0.0
        } else {
            price
                .parse::<f64>()
                .map_err(|_| ValidationError::PriceNotANumber.to_string())?
        };

        let path = self.image_path.trim();
        draft.image = if path.is_empty() {
            None
        } else {
            let image = ImageUpload::from_path(Path::new(path))
                .map_err(|e| format!("Could not read image {}: {}", path, e))?;
            Some(image)
        };

        Ok(draft)
    }
}

/// Central application state shared across egui views.
pub struct AppState {
    pub api: HttpApiClient,
    pub current_view: AppView,
    pub login: LoginFlow,
    pub register: RegisterFlow,
    login_result: Option<Receiver<AuthResult>>,
    register_result: Option<Receiver<AuthResult>>,
    catalog: CatalogWorker,
    pub snapshot: CatalogSnapshot,
    pub form: ProductForm,
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new(api: HttpApiClient, catalog: CatalogWorker) -> Self {
        Self {
            api,
            current_view: AppView::Home,
            login: LoginFlow::new(),
            register: RegisterFlow::new(),
            login_result: None,
            register_result: None,
            catalog,
            snapshot: CatalogSnapshot::default(),
            form: ProductForm::default(),
            notice: None,
        }
    }

    /// Whether a catalog command is still being processed
    pub fn catalog_busy(&self) -> bool {
        self.catalog.is_busy()
    }

    pub fn navigate(&mut self, view: AppView) {
        self.current_view.navigate(view);
        if view == AppView::Products && !self.snapshot.mounted {
            self.catalog.send(CatalogCommand::Mount);
        }
    }

    pub fn handle_login(&mut self) {
        let Some(request) = self.login.begin() else {
            return;
        };

        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api.login(&request));
        });
        self.login_result = Some(rx);
    }

    pub fn handle_register(&mut self) {
        let Some(request) = self.register.begin() else {
            return;
        };

        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api.register(&request));
        });
        self.register_result = Some(rx);
    }

    pub fn check_auth_result(&mut self) {
        let login = self.login_result.as_ref().and_then(|rx| rx.try_recv().ok());
        if let Some(result) = login {
            self.login_result = None;
            self.login.finish(result, &mut self.current_view);
        }

        let register = self.register_result.as_ref().and_then(|rx| rx.try_recv().ok());
        if let Some(result) = register {
            self.register_result = None;
            self.register.finish(result);
        }
    }

    /// Drain catalog events, refreshing the form only when the draft changed
    pub fn check_catalog_events(&mut self) {
        while let Some(event) = self.catalog.try_recv() {
            if self.form.is_stale(&event.snapshot.draft) {
                self.form.load(&event.snapshot.draft);
            }
            if event.notice.is_some() {
                self.notice = event.notice;
            }
            self.snapshot = event.snapshot;
        }
    }

    pub fn submit_product(&mut self) {
        match self.form.to_draft() {
            Ok(draft) => {
                self.notice = None;
                self.catalog.send(CatalogCommand::Submit(draft));
            }
            Err(e) => {
                tracing::warn!("{}", e);
                self.notice = Some(Notice::error(e));
            }
        }
    }

    pub fn begin_create(&mut self) {
        self.catalog.send(CatalogCommand::BeginCreate);
    }

    pub fn edit_product(&mut self, id: ProductId) {
        self.catalog.send(CatalogCommand::Edit(id));
    }

    pub fn request_delete(&mut self, id: ProductId) {
        self.catalog.send(CatalogCommand::RequestDelete(id));
    }

    pub fn confirm_delete(&mut self) {
        self.catalog.send(CatalogCommand::ConfirmDelete);
    }

    pub fn cancel_delete(&mut self) {
        self.catalog.send(CatalogCommand::CancelDelete);
    }

    pub fn toggle_filter(&mut self, name: &str) {
        self.catalog.send(CatalogCommand::ToggleFilter(name.to_string()));
    }

    pub fn clear_filter(&mut self) {
        self.catalog.send(CatalogCommand::ClearFilter);
    }

    /// Re-fetch categories and products
    pub fn reload_catalog(&mut self) {
        self.catalog.send(CatalogCommand::Reload);
    }
}
