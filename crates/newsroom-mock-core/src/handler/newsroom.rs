//! Stateful mock of the Newsroom newsletter subscription API.

use crate::config::{MockSettings, SeedFixture};
use crate::handler::error::HandlerError;
use crate::matching::{parse_query_string, targets_api};
use crate::state::{StateStore, SUBSCRIPTIONS_KEY, UNIVERSES_KEY};
use crate::types::params::{split_ids, ListParams, SubscribeParams, SubscriptionEnvelope};
use crate::types::request::MockRequest;
use crate::types::response::MockResponse;
use crate::types::subscription::{
    SubscriptionEntry, SubscriptionRecord, SubscriptionStore, UniverseRegistry,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

/// Handler standing in for the Newsroom subscription API.
///
/// The interception layer asks [`applies`](Self::applies) first and hands
/// matching requests to [`get_response`](Self::get_response). Requests are
/// handled one at a time, start to finish; the injected store sees one
/// full read-modify-write per call and nothing in between.
#[derive(Debug)]
pub struct NewsroomMock<S> {
    store: S,
    settings: MockSettings,
}

impl<S: StateStore> NewsroomMock<S> {
    /// Handler over `store` with the default settings.
    pub fn new(store: S) -> Self {
        Self::with_settings(store, MockSettings::default())
    }

    /// Handler with explicit settings.
    pub fn with_settings(store: S, settings: MockSettings) -> Self {
        Self { store, settings }
    }

    /// Gives the store back, ending the handler's lifetime.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Whether this request is for the mocked API at all.
    ///
    /// Host equality plus path prefix; method, query string, and body play
    /// no part at this stage. Pure, no side effects.
    pub fn applies(&self, request: &MockRequest) -> bool {
        targets_api(
            &request.host,
            request.path(),
            &self.settings.api_host,
            &self.settings.api_base_path,
        )
    }

    /// Dispatches by exact path and synthesizes the response.
    ///
    /// The routing table is the closed set of three operations; any other
    /// path under the prefix gets a 404 with an empty body.
    pub fn get_response(&mut self, request: &MockRequest) -> Result<MockResponse, HandlerError> {
        let path = request.path();
        if path == self.settings.endpoint("subscriptions") {
            self.subscriptions(request)
        } else if path == self.settings.endpoint("subscribe") {
            self.subscribe(request)
        } else if path == self.settings.endpoint("unsubscribe") {
            self.unsubscribe(request)
        } else {
            Ok(MockResponse::not_found())
        }
    }

    /// Seeds subscription state from fixtures, as if each had been a prior
    /// subscribe call.
    pub fn seed(&mut self, fixtures: &[SeedFixture]) -> Result<(), HandlerError> {
        let mut subscriptions: SubscriptionStore = self.load_state(SUBSCRIPTIONS_KEY)?;
        let mut universes: UniverseRegistry = self.load_state(UNIVERSES_KEY)?;

        for fixture in fixtures {
            let language = fixture
                .language
                .clone()
                .unwrap_or_else(|| self.settings.default_language.clone());
            for sv_id in split_ids(&fixture.sv_id) {
                subscriptions
                    .entry(fixture.universe.clone())
                    .or_default()
                    .entry(sv_id)
                    .or_default()
                    .insert(
                        fixture.email.clone(),
                        SubscriptionEntry::subscribed(&language, fixture.topic_ext_ids.clone()),
                    );
            }
            universes.insert(fixture.app.clone(), fixture.universe.clone());
        }

        self.persist(SUBSCRIPTIONS_KEY, &subscriptions)?;
        self.persist(UNIVERSES_KEY, &universes)
    }

    /// Lists active subscriptions for one email.
    ///
    /// An explicit sv_id set acts as a filter; an empty set means every
    /// list known under the universe. A universe nobody subscribed in yet
    /// simply has no lists to report. Never mutates state.
    fn subscriptions(&self, request: &MockRequest) -> Result<MockResponse, HandlerError> {
        let params: SubscriptionEnvelope<ListParams> = self.payload(request)?;
        let ListParams {
            universe_acronym: universe,
            email,
            sv_id,
        } = params.subscription;

        let subscriptions: SubscriptionStore = self.load_state(SUBSCRIPTIONS_KEY)?;
        let sv_ids = split_ids(&sv_id);
        let candidates: Vec<String> = if !sv_ids.is_empty() {
            sv_ids
        } else {
            subscriptions
                .get(&universe)
                .map(|lists| lists.keys().cloned().collect())
                .unwrap_or_default()
        };

        let mut current = Vec::new();
        for sv_id in &candidates {
            let entry = subscriptions
                .get(&universe)
                .and_then(|lists| lists.get(sv_id))
                .and_then(|emails| emails.get(&email));
            if let Some(entry) = entry.filter(|e| e.subscribed) {
                let language = entry
                    .language
                    .as_deref()
                    .unwrap_or(&self.settings.default_language);
                current.push(SubscriptionRecord::generate(
                    &self.settings,
                    &universe,
                    &email,
                    sv_id,
                    language,
                    false,
                ));
            }
        }

        Ok(MockResponse::json(200, &current)?)
    }

    /// Subscribes an email to every id in the primary-then-related union.
    ///
    /// `isNewSubscription` is decided against the state as it stands when
    /// each id is reached; the entry itself is then always (re)written as
    /// subscribed, the way the real service re-confirms subscriptions that
    /// already exist.
    fn subscribe(&mut self, request: &MockRequest) -> Result<MockResponse, HandlerError> {
        let params: SubscriptionEnvelope<SubscribeParams> = self.payload(request)?;
        let SubscribeParams {
            universe_acronym: universe,
            topic_ext_website: app,
            email,
            sv_id,
            related_sv_id,
            language,
            topic_ext_id,
        } = params.subscription;

        let language = language.unwrap_or_else(|| self.settings.default_language.clone());
        let topic_ext_ids = topic_ext_id.as_deref().map(split_ids).unwrap_or_default();

        let mut sv_ids = split_ids(&sv_id);
        sv_ids.extend(related_sv_id.as_deref().map(split_ids).unwrap_or_default());

        let mut subscriptions: SubscriptionStore = self.load_state(SUBSCRIPTIONS_KEY)?;
        let mut universes: UniverseRegistry = self.load_state(UNIVERSES_KEY)?;

        let mut current = Vec::new();
        for sv_id in &sv_ids {
            let already_subscribed = subscriptions
                .get(&universe)
                .and_then(|lists| lists.get(sv_id))
                .and_then(|emails| emails.get(&email))
                .is_some_and(|entry| entry.subscribed);

            current.push(SubscriptionRecord::generate(
                &self.settings,
                &universe,
                &email,
                sv_id,
                &language,
                !already_subscribed,
            ));

            subscriptions
                .entry(universe.clone())
                .or_default()
                .entry(sv_id.clone())
                .or_default()
                .insert(
                    email.clone(),
                    SubscriptionEntry::subscribed(&language, topic_ext_ids.clone()),
                );
        }
        // Last write wins, regardless of email.
        universes.insert(app, universe);

        self.persist(SUBSCRIPTIONS_KEY, &subscriptions)?;
        self.persist(UNIVERSES_KEY, &universes)?;

        Ok(MockResponse::json(200, &current)?)
    }

    /// Unsubscribes a single (universe, sv_id, email) triple.
    ///
    /// The universe is resolved through the app registry, so an app that
    /// never subscribed cannot unsubscribe. The success body is the same
    /// whether the entry was still subscribed or not, matching the real
    /// service.
    fn unsubscribe(&mut self, request: &MockRequest) -> Result<MockResponse, HandlerError> {
        let params = parse_query_string(request.query());
        let email = required_param(&params, "user_email")?;
        // The real API takes exactly one sv_id per call.
        let sv_id = required_param(&params, "sv_id")?;
        let app = required_param(&params, "app")?;

        let mut subscriptions: SubscriptionStore = self.load_state(SUBSCRIPTIONS_KEY)?;
        let universes: UniverseRegistry = self.load_state(UNIVERSES_KEY)?;
        let universe = universes
            .get(&app)
            .ok_or_else(|| HandlerError::UnknownApplication { app: app.clone() })?;

        let Some(entry) = subscriptions
            .get_mut(universe)
            .and_then(|lists| lists.get_mut(&sv_id))
            .and_then(|emails| emails.get_mut(&email))
        else {
            // An address the service has never seen surfaces as its
            // internal error, which the API turns into a plain 404.
            return Ok(MockResponse::text(404, "Not found"));
        };

        *entry = SubscriptionEntry::unsubscribed();
        self.persist(SUBSCRIPTIONS_KEY, &subscriptions)?;

        Ok(MockResponse::text(200, "User unsubscribed!"))
    }

    fn payload<T: DeserializeOwned>(&self, request: &MockRequest) -> Result<T, HandlerError> {
        let body = request.payload.as_ref().ok_or(HandlerError::MissingBody)?;
        Ok(serde_json::from_value(body.clone())?)
    }

    fn load_state<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, HandlerError> {
        match self.store.get(key) {
            Some(value) => serde_json::from_value(value).map_err(|source| HandlerError::State {
                key: key.to_owned(),
                source,
            }),
            None => Ok(T::default()),
        }
    }

    fn persist<T: Serialize>(&mut self, key: &str, state: &T) -> Result<(), HandlerError> {
        let value = serde_json::to_value(state)?;
        self.store.set(key, value);
        Ok(())
    }
}

fn required_param(
    params: &HashMap<String, String>,
    name: &str,
) -> Result<String, HandlerError> {
    params
        .get(name)
        .cloned()
        .ok_or_else(|| HandlerError::MissingParameter {
            name: name.to_owned(),
        })
}
