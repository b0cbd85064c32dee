use client::DoctorsClient;
use dioxus::prelude::*;
use shared_types::{DoctorState, FetchDoctorsParams, FetchState, ParamChange};

/// Handle returned by [`use_doctors`].
///
/// Copyable so it can be moved into any number of event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct UseDoctors {
    initial: CopyValue<FetchDoctorsParams>,
    params: Signal<FetchDoctorsParams>,
    state: Signal<FetchState>,
    reload: Signal<u64>,
}

impl UseDoctors {
    /// Current query parameters. Subscribes the caller.
    pub fn params(&self) -> FetchDoctorsParams {
        self.params.read().clone()
    }

    /// Current fetch snapshot. Subscribes the caller.
    pub fn state(&self) -> FetchState {
        self.state.read().clone()
    }

    /// Merge `changes` into the current params and fetch again.
    pub fn update_params(mut self, changes: Vec<ParamChange>) {
        let next = self.params.peek().merged(changes);
        self.params.set(next);
    }

    /// Restore the params the hook was created with.
    pub fn reset_params(mut self) {
        let initial = self.initial.read().clone();
        self.params.set(initial);
    }

    /// Re-issue the request for the current params.
    pub fn refetch(mut self) {
        *self.reload.write() += 1;
    }
}

/// Fetch pages of doctors, refetching whenever the params change.
///
/// Requires a [`DoctorsClient`] in context. Each fetch takes a ticket from
/// [`FetchState::begin`]; a response that arrives after a newer request was
/// issued is dropped, so the list always reflects the latest params.
pub fn use_doctors(initial: FetchDoctorsParams) -> UseDoctors {
    let client = use_hook(|| CopyValue::new(consume_context::<DoctorsClient>()));
    let initial = use_hook(|| CopyValue::new(initial));
    let params = use_signal(|| initial.read().clone());
    let mut state = use_signal(FetchState::pending);
    let reload = use_signal(|| 0u64);

    use_effect(move || {
        let _ = reload();
        let params = params.read().clone();
        let client = client.read().clone();
        let ticket = state.write().begin();
        tracing::debug!(seq = ticket.seq(), endpoint = %params.endpoint(), "Fetching doctors");

        spawn(async move {
            let result = client.fetch_doctors(&params).await;
            if !state.write().finish(ticket, result) {
                tracing::debug!(seq = ticket.seq(), "Discarded stale doctors response");
            }
        });
    });

    UseDoctors {
        initial,
        params,
        state,
        reload,
    }
}

/// Handle returned by [`use_doctor`].
#[derive(Clone, Copy, PartialEq)]
pub struct UseDoctor {
    state: Signal<DoctorState>,
    reload: Signal<u64>,
}

impl UseDoctor {
    pub fn state(&self) -> DoctorState {
        self.state.read().clone()
    }

    pub fn refetch(mut self) {
        *self.reload.write() += 1;
    }
}

/// Fetch a single doctor, refetching when `id` changes. An empty id is a no-op.
pub fn use_doctor(id: String) -> UseDoctor {
    let client = use_hook(|| CopyValue::new(consume_context::<DoctorsClient>()));
    let mut state = use_signal(DoctorState::pending);
    let reload = use_signal(|| 0u64);

    use_effect(use_reactive((&id,), move |(id,)| {
        let _ = reload();
        if id.is_empty() {
            state.write().clear();
            return;
        }
        let client = client.read().clone();
        let ticket = state.write().begin();

        spawn(async move {
            let result = client.fetch_doctor_by_id(&id).await;
            if !state.write().finish(ticket, result) {
                tracing::debug!(seq = ticket.seq(), doctor_id = %id, "Discarded stale doctor response");
            }
        });
    }));

    UseDoctor { state, reload }
}
