//! Registration-form orchestration controller.
//!
//! Owns the draft aggregate and the option lists, reconciles UI and
//! network-completion events into atomic state transitions, and drives the
//! submit protocol through the pure registration state machine.

use std::sync::Arc;

use tracing::{debug, warn};

use coleta_core::catalog::CollectionItem;
use coleta_core::config::MapConfig;
use coleta_core::geo::Coordinate;
use coleta_core::ports::{
    CollectionPointPort, GeoDirectoryPort, GeolocationPort, ItemCatalogPort, NavigatorPort, UiPort,
};
use coleta_core::registration::{
    RegistrationAction, RegistrationDraft, RegistrationEvent, RegistrationState,
    RegistrationStateMachine,
};

use super::view::RegistrationView;
use super::{LoadCatalog, LoadCities, LoadUfs};

/// Errors produced by the submit protocol.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The current state allows no create request (one is already in
    /// flight, or the point was already created).
    #[error("no submission possible in the current state")]
    AlreadySubmitting,
    /// The creation service rejected the request. The draft is left intact
    /// for resubmission.
    #[error("collection point create failed: {0}")]
    Create(#[source] anyhow::Error),
}

/// Outward collaborators of the registration screen.
#[derive(Clone)]
pub struct RegistrationPorts {
    pub catalog: Arc<dyn ItemCatalogPort>,
    pub geo: Arc<dyn GeoDirectoryPort>,
    pub points: Arc<dyn CollectionPointPort>,
    pub geolocation: Arc<dyn GeolocationPort>,
    pub navigator: Arc<dyn NavigatorPort>,
    pub ui: Arc<dyn UiPort>,
}

/// Version-stamped city fetch ticket.
///
/// [`RegistrationController::select_uf`] hands one out per due fetch; only
/// the response applied with the newest ticket wins, so an out-of-order late
/// response can never overwrite a newer selection's city list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRequest {
    pub uf: String,
    epoch: u64,
}

/// Holds all in-progress registration state for one screen lifetime.
///
/// All mutation happens through `&mut self`, one event at a time; the
/// external services are reached only through the ports.
pub struct RegistrationController {
    ports: RegistrationPorts,
    map: MapConfig,
    state: RegistrationState,
    draft: RegistrationDraft,
    items: Vec<CollectionItem>,
    ufs: Vec<String>,
    cities: Vec<String>,
    initial_center: Option<Coordinate>,
    map_clicked: bool,
    city_epoch: u64,
}

impl RegistrationController {
    pub fn new(ports: RegistrationPorts, map: MapConfig) -> Self {
        Self {
            ports,
            map,
            state: RegistrationState::Empty,
            draft: RegistrationDraft::new(),
            items: Vec::new(),
            ufs: Vec::new(),
            cities: Vec::new(),
            initial_center: None,
            map_clicked: false,
            city_epoch: 0,
        }
    }

    /// Load the item catalog and the UF list, concurrently.
    ///
    /// Geolocation is driven separately (see [`resolve_initial_position`])
    /// so a device lookup that never resolves cannot wedge screen entry.
    ///
    /// [`resolve_initial_position`]: Self::resolve_initial_position
    pub async fn enter_screen(&mut self) {
        let catalog = LoadCatalog::new(self.ports.catalog.clone());
        let ufs = LoadUfs::new(self.ports.geo.clone());
        let (items, ufs) = tokio::join!(catalog.execute(), ufs.execute());
        self.items = items;
        self.ufs = ufs;
    }

    /// Ask the device for its position and seed the map with it.
    ///
    /// Denial falls back silently to the configured default center.
    pub async fn resolve_initial_position(&mut self) {
        match self.ports.geolocation.current_position().await {
            Ok(position) => self.apply_geolocation(position),
            Err(error) => {
                warn!("geolocation unavailable, keeping the default center: {error:#}");
            }
        }
    }

    /// Feed in a geolocation fix delivered by the shell.
    ///
    /// A late fix recenters the viewport and, only if the user has not
    /// clicked yet, seeds the marker. It never moves an already-clicked
    /// point.
    pub fn apply_geolocation(&mut self, position: Coordinate) {
        self.initial_center = Some(position);
        if !self.map_clicked {
            self.draft.choose_position(position);
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.set_name(name);
        self.dispatch(RegistrationEvent::FieldEdited);
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.set_email(email);
        self.dispatch(RegistrationEvent::FieldEdited);
    }

    pub fn set_whatsapp(&mut self, whatsapp: impl Into<String>) {
        self.draft.set_whatsapp(whatsapp);
        self.dispatch(RegistrationEvent::FieldEdited);
    }

    /// Change the UF selection.
    ///
    /// The displayed city list is cleared immediately (it was only valid for
    /// the previous UF) and, unless the sentinel was chosen, a fetch ticket
    /// for the new UF is returned. The caller resolves the ticket via
    /// [`apply_city_fetch`], or uses [`select_uf_and_load`] to do both in one
    /// step.
    ///
    /// [`apply_city_fetch`]: Self::apply_city_fetch
    /// [`select_uf_and_load`]: Self::select_uf_and_load
    #[must_use = "resolve the returned ticket with apply_city_fetch"]
    pub fn select_uf(&mut self, uf: impl Into<String>) -> Option<CityRequest> {
        let uf = uf.into();
        self.draft.select_uf(uf.clone());
        self.cities.clear();
        self.city_epoch += 1;
        let actions = self.dispatch(RegistrationEvent::UfSelected { uf });
        actions.into_iter().find_map(|action| match action {
            RegistrationAction::FetchCities { uf } => Some(CityRequest {
                uf,
                epoch: self.city_epoch,
            }),
            _ => None,
        })
    }

    /// Install a fetched city list, unless its ticket went stale.
    pub fn apply_city_fetch(&mut self, request: &CityRequest, cities: Vec<String>) {
        if request.epoch != self.city_epoch {
            debug!(uf = %request.uf, "discarding stale city list");
            return;
        }
        self.cities = cities;
    }

    /// Convenience: select a UF and resolve its city fetch inline.
    pub async fn select_uf_and_load(&mut self, uf: impl Into<String>) {
        if let Some(request) = self.select_uf(uf) {
            let loader = LoadCities::new(self.ports.geo.clone());
            let cities = loader.execute(&request.uf).await;
            self.apply_city_fetch(&request, cities);
        }
    }

    /// Change the city selection. Never triggers a fetch.
    pub fn select_city(&mut self, city: impl Into<String>) {
        self.draft.select_city(city);
        self.dispatch(RegistrationEvent::CitySelected);
    }

    /// A click on the map surface. Overwrites the chosen point wholesale.
    pub fn click_map(&mut self, position: Coordinate) {
        self.map_clicked = true;
        self.draft.choose_position(position);
        self.dispatch(RegistrationEvent::MapClicked);
    }

    pub fn toggle_item(&mut self, id: i64) {
        self.draft.toggle_item(id);
        self.dispatch(RegistrationEvent::ItemToggled);
    }

    /// Compose the record from the current draft and issue the create
    /// request.
    ///
    /// No validation is performed: unchosen selects are submitted as their
    /// literal sentinel. On success the confirmation is surfaced and
    /// control is handed to the navigator; on failure the draft stays
    /// intact and the error is returned to the caller, which must handle
    /// it.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let actions = self.dispatch(RegistrationEvent::SubmitRequested);
        if !actions.contains(&RegistrationAction::CreatePoint) {
            return Err(SubmitError::AlreadySubmitting);
        }

        let record = self.draft.to_record();
        match self.ports.points.create(&record).await {
            Ok(()) => {
                let actions = self.dispatch(RegistrationEvent::SubmitSucceeded);
                self.execute_actions(actions).await;
                Ok(())
            }
            Err(error) => {
                self.dispatch(RegistrationEvent::SubmitFailed {
                    reason: error.to_string(),
                });
                Err(SubmitError::Create(error))
            }
        }
    }

    /// Read-only projection for the presentation layer.
    pub fn view(&self) -> RegistrationView {
        RegistrationView {
            items: self.items.clone(),
            ufs: self.ufs.clone(),
            cities: self.cities.clone(),
            name: self.draft.name.clone(),
            email: self.draft.email.clone(),
            whatsapp: self.draft.whatsapp.clone(),
            uf: self.draft.uf.clone(),
            city: self.draft.city.clone(),
            selected_items: self.draft.selected_items.clone(),
            marker: self.draft.position,
            map_center: self
                .initial_center
                .unwrap_or_else(|| self.map.default_center()),
            zoom: self.map.default_zoom,
            state: self.state.clone(),
        }
    }

    pub fn state(&self) -> &RegistrationState {
        &self.state
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn items(&self) -> &[CollectionItem] {
        &self.items
    }

    pub fn ufs(&self) -> &[String] {
        &self.ufs
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    fn dispatch(&mut self, event: RegistrationEvent) -> Vec<RegistrationAction> {
        let current = self.state.clone();
        let (next, actions) = RegistrationStateMachine::transition(current, event);
        self.state = next;
        actions
    }

    async fn execute_actions(&mut self, actions: Vec<RegistrationAction>) {
        for action in actions {
            match action {
                RegistrationAction::NotifyCreated => {
                    if let Err(error) = self.ports.ui.point_created().await {
                        warn!("confirmation could not be shown: {error:#}");
                    }
                }
                RegistrationAction::ReturnToLanding => {
                    if let Err(error) = self.ports.navigator.return_to_landing().await {
                        warn!("navigation back to the landing screen failed: {error:#}");
                    }
                }
                // Handled at their call sites, never reach this loop.
                RegistrationAction::FetchCities { .. } | RegistrationAction::CreatePoint => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;
    use coleta_core::registration::{NewCollectionPoint, NOT_SELECTED};

    struct MockCatalog {
        fail: bool,
    }

    #[async_trait::async_trait]
    impl ItemCatalogPort for MockCatalog {
        async fn list_items(&self) -> anyhow::Result<Vec<CollectionItem>> {
            if self.fail {
                anyhow::bail!("catalog down");
            }
            Ok(vec![
                CollectionItem {
                    id: 3,
                    title: "Papéis e Papelão".into(),
                    image: "papeis-papelao.svg".into(),
                },
                CollectionItem {
                    id: 7,
                    title: "Óleo de Cozinha".into(),
                    image: "oleo.svg".into(),
                },
            ])
        }
    }

    struct MockGeo {
        fail: bool,
        city_calls: Mutex<Vec<String>>,
    }

    impl MockGeo {
        fn new() -> Self {
            Self {
                fail: false,
                city_calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl GeoDirectoryPort for MockGeo {
        async fn list_ufs(&self) -> anyhow::Result<Vec<String>> {
            if self.fail {
                anyhow::bail!("directory down");
            }
            Ok(vec!["RJ".into(), "SP".into()])
        }

        async fn list_cities(&self, uf: &str) -> anyhow::Result<Vec<String>> {
            self.city_calls.lock().unwrap().push(uf.to_string());
            match uf {
                "SP" => Ok(vec!["São Paulo".into(), "Campinas".into()]),
                "RJ" => Ok(vec!["Rio de Janeiro".into()]),
                _ => Ok(Vec::new()),
            }
        }
    }

    struct MockPoints {
        fail: bool,
        created: Mutex<Vec<NewCollectionPoint>>,
    }

    impl MockPoints {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                created: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl CollectionPointPort for MockPoints {
        async fn create(&self, point: &NewCollectionPoint) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("service rejected the point");
            }
            self.created.lock().unwrap().push(point.clone());
            Ok(())
        }
    }

    struct MockGeolocation {
        position: Option<Coordinate>,
    }

    #[async_trait::async_trait]
    impl GeolocationPort for MockGeolocation {
        async fn current_position(&self) -> anyhow::Result<Coordinate> {
            self.position.ok_or_else(|| anyhow::anyhow!("denied"))
        }
    }

    #[derive(Default)]
    struct MockNavigator {
        returns: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl NavigatorPort for MockNavigator {
        async fn return_to_landing(&self) -> anyhow::Result<()> {
            self.returns.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockUi {
        confirmations: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl UiPort for MockUi {
        async fn point_created(&self) -> anyhow::Result<()> {
            self.confirmations.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct Harness {
        geo: Arc<MockGeo>,
        points: Arc<MockPoints>,
        navigator: Arc<MockNavigator>,
        ui: Arc<MockUi>,
        controller: RegistrationController,
    }

    fn harness_with(catalog_fail: bool, points_fail: bool, position: Option<Coordinate>) -> Harness {
        let geo = Arc::new(MockGeo::new());
        let points = Arc::new(MockPoints::new(points_fail));
        let navigator = Arc::new(MockNavigator::default());
        let ui = Arc::new(MockUi::default());
        let ports = RegistrationPorts {
            catalog: Arc::new(MockCatalog { fail: catalog_fail }),
            geo: geo.clone(),
            points: points.clone(),
            geolocation: Arc::new(MockGeolocation { position }),
            navigator: navigator.clone(),
            ui: ui.clone(),
        };
        let controller = RegistrationController::new(ports, MapConfig {
            default_latitude: -23.6420983,
            default_longitude: -46.6029821,
            default_zoom: 15,
        });
        Harness {
            geo,
            points,
            navigator,
            ui,
            controller,
        }
    }

    fn harness() -> Harness {
        harness_with(false, false, None)
    }

    #[tokio::test]
    async fn enter_screen_populates_both_option_lists() {
        let mut h = harness();
        h.controller.enter_screen().await;
        assert_eq!(h.controller.items().len(), 2);
        assert_eq!(h.controller.ufs(), ["RJ", "SP"]);
    }

    #[tokio::test]
    async fn catalog_outage_leaves_grid_empty_but_ufs_load() {
        let mut h = harness_with(true, false, None);
        h.controller.enter_screen().await;
        assert!(h.controller.items().is_empty());
        assert_eq!(h.controller.ufs(), ["RJ", "SP"]);
    }

    #[tokio::test]
    async fn selecting_uf_loads_its_cities() {
        let mut h = harness();
        h.controller.select_uf_and_load("SP").await;
        assert_eq!(h.controller.cities(), ["São Paulo", "Campinas"]);
        assert_eq!(h.controller.draft().uf, "SP");
    }

    #[tokio::test]
    async fn new_uf_replaces_previous_city_list_entirely() {
        let mut h = harness();
        h.controller.select_uf_and_load("SP").await;
        h.controller.select_uf_and_load("RJ").await;
        assert_eq!(h.controller.cities(), ["Rio de Janeiro"]);
    }

    #[tokio::test]
    async fn sentinel_uf_clears_cities_without_a_request() {
        let mut h = harness();
        h.controller.select_uf_and_load("SP").await;
        h.controller.select_uf_and_load(NOT_SELECTED).await;
        assert!(h.controller.cities().is_empty());
        assert_eq!(*h.geo.city_calls.lock().unwrap(), vec!["SP"]);
    }

    #[tokio::test]
    async fn stale_city_response_is_discarded() {
        let mut h = harness();
        let sp = h.controller.select_uf("SP").expect("fetch due");
        let rj = h.controller.select_uf("RJ").expect("fetch due");

        // RJ's response lands first; SP's arrives late and must lose.
        h.controller
            .apply_city_fetch(&rj, vec!["Rio de Janeiro".into()]);
        h.controller
            .apply_city_fetch(&sp, vec!["São Paulo".into(), "Campinas".into()]);

        assert_eq!(h.controller.cities(), ["Rio de Janeiro"]);
    }

    #[tokio::test]
    async fn reselecting_same_uf_invalidates_the_older_ticket() {
        let mut h = harness();
        let first = h.controller.select_uf("SP").expect("fetch due");
        let second = h.controller.select_uf("RJ").expect("fetch due");
        let third = h.controller.select_uf("SP").expect("fetch due");

        h.controller.apply_city_fetch(&third, vec!["Santos".into()]);
        h.controller
            .apply_city_fetch(&first, vec!["São Paulo".into()]);
        h.controller
            .apply_city_fetch(&second, vec!["Rio de Janeiro".into()]);

        assert_eq!(h.controller.cities(), ["Santos"]);
    }

    #[tokio::test]
    async fn click_takes_precedence_over_late_geolocation() {
        let mut h = harness();
        h.controller.click_map(Coordinate::new(-23.5, -46.6));
        h.controller
            .apply_geolocation(Coordinate::new(-10.0, -50.0));

        assert_eq!(h.controller.draft().position, Coordinate::new(-23.5, -46.6));
        // The viewport still recenters on the fix.
        assert_eq!(h.controller.view().map_center, Coordinate::new(-10.0, -50.0));
    }

    #[tokio::test]
    async fn geolocation_seeds_marker_until_first_click() {
        let mut h = harness_with(false, false, Some(Coordinate::new(-10.0, -50.0)));
        h.controller.resolve_initial_position().await;
        assert_eq!(h.controller.draft().position, Coordinate::new(-10.0, -50.0));

        h.controller.click_map(Coordinate::new(-23.0, -46.0));
        assert_eq!(h.controller.draft().position, Coordinate::new(-23.0, -46.0));
    }

    #[tokio::test]
    async fn denied_geolocation_keeps_default_viewport() {
        let mut h = harness();
        h.controller.resolve_initial_position().await;
        let view = h.controller.view();
        assert_eq!(view.map_center, Coordinate::new(-23.6420983, -46.6029821));
        assert_eq!(view.marker, Coordinate::ORIGIN);
    }

    #[tokio::test]
    async fn submit_sends_snapshot_and_navigates_home() {
        let mut h = harness();
        h.controller.set_name("Eco Shop");
        h.controller.select_uf_and_load("SP").await;
        h.controller.select_city("São Paulo");
        h.controller.toggle_item(3);

        h.controller.submit().await.expect("create succeeds");

        let created = h.points.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].name, "Eco Shop");
        assert_eq!(created[0].city, "São Paulo");
        assert_eq!(h.ui.confirmations.load(Ordering::SeqCst), 1);
        assert_eq!(h.navigator.returns.load(Ordering::SeqCst), 1);
        assert_eq!(*h.controller.state(), RegistrationState::Done);
    }

    #[tokio::test]
    async fn unvalidated_submit_carries_sentinels_literally() {
        let mut h = harness();
        h.controller.set_name("Eco Shop");
        h.controller.submit().await.expect("create succeeds");

        let created = h.points.created.lock().unwrap();
        assert_eq!(created[0].uf, "0");
        assert_eq!(created[0].city, "0");
    }

    #[tokio::test]
    async fn failed_submit_keeps_draft_and_skips_navigation() {
        let mut h = harness_with(false, true, None);
        h.controller.set_name("Eco Shop");
        h.controller.toggle_item(7);

        let error = h.controller.submit().await.expect_err("create fails");
        assert!(matches!(error, SubmitError::Create(_)));
        assert!(matches!(
            h.controller.state(),
            RegistrationState::Failed { .. }
        ));
        assert_eq!(h.controller.draft().name, "Eco Shop");
        assert_eq!(h.controller.draft().selected_items, vec![7]);
        assert_eq!(h.navigator.returns.load(Ordering::SeqCst), 0);
        assert_eq!(h.ui.confirmations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn view_projection_serializes_for_the_shell() {
        let mut h = harness();
        h.controller.enter_screen().await;
        h.controller.select_uf_and_load("SP").await;
        let json = serde_json::to_value(h.controller.view()).unwrap();
        assert_eq!(json["ufs"], serde_json::json!(["RJ", "SP"]));
        assert_eq!(json["cities"], serde_json::json!(["São Paulo", "Campinas"]));
        assert_eq!(json["uf"], "SP");
        assert_eq!(json["state"], "Editing");
        assert_eq!(json["zoom"], 15);
    }

    #[tokio::test]
    async fn submit_after_done_is_rejected() {
        let mut h = harness();
        h.controller.set_name("Eco Shop");
        h.controller.submit().await.expect("create succeeds");

        let error = h.controller.submit().await.expect_err("screen is done");
        assert!(matches!(error, SubmitError::AlreadySubmitting));
        assert_eq!(h.points.created.lock().unwrap().len(), 1);
    }
}
