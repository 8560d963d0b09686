use gloo_timers::callback::Timeout;
use shared::toast::{DEFAULT_DURATION_MS, REMOVE_DELAY_MS, SHOW_DELAY_MS};
use shared::{Toast, ToastKind, ToastStack};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ToastRequest {
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
}

impl ToastRequest {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<ToastRequest>,
    pub close_toast: Callback<u64>,
}

impl ToastContext {
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        self.add_toast.emit(ToastRequest::new(message, kind));
    }
}

/// Timers attached to one toast. Dropping a [`Timeout`] clears it.
#[derive(Default)]
struct ToastTimers {
    show: Option<Timeout>,
    auto_dismiss: Option<Timeout>,
    remove: Option<Timeout>,
}

/// Owns the toast stack and every timer attached to it.
///
/// Each toast has one pending auto-dismiss timer; closing a toast by hand
/// drops it, so exactly one removal path runs. All of a toast's timers are
/// released together once its node is removed.
#[derive(Clone)]
pub struct ToastDriver {
    stack: Rc<RefCell<ToastStack>>,
    timers: Rc<RefCell<HashMap<u64, ToastTimers>>>,
    next_id: Rc<Cell<u64>>,
    rerender: Callback<()>,
}

impl ToastDriver {
    pub fn new(rerender: Callback<()>) -> Self {
        Self {
            stack: Rc::new(RefCell::new(ToastStack::new())),
            timers: Rc::new(RefCell::new(HashMap::new())),
            next_id: Rc::new(Cell::new(0)),
            rerender,
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.stack.borrow().toasts().to_vec()
    }

    pub fn auto_dismiss_pending(&self, id: u64) -> bool {
        self.timers
            .borrow()
            .get(&id)
            .map_or(false, |timers| timers.auto_dismiss.is_some())
    }

    /// Whether any timer is still held for the toast.
    pub fn has_timers(&self, id: u64) -> bool {
        self.timers.borrow().contains_key(&id)
    }

    pub fn add(&self, request: ToastRequest) -> u64 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.stack.borrow_mut().push(
            Toast::new(id, request.message, request.kind).with_duration(request.duration_ms),
        );
        self.rerender.emit(());

        let show = {
            let driver = self.clone();
            Timeout::new(SHOW_DELAY_MS, move || {
                driver.stack.borrow_mut().show(id);
                driver.rerender.emit(());
            })
        };
        let auto_dismiss = {
            let driver = self.clone();
            Timeout::new(request.duration_ms, move || driver.dismiss(id))
        };
        self.timers.borrow_mut().insert(
            id,
            ToastTimers {
                show: Some(show),
                auto_dismiss: Some(auto_dismiss),
                remove: None,
            },
        );
        id
    }

    pub fn close(&self, id: u64) {
        let cancelled = self
            .timers
            .borrow_mut()
            .get_mut(&id)
            .and_then(|timers| timers.auto_dismiss.take());
        drop(cancelled);
        self.dismiss(id);
    }

    fn dismiss(&self, id: u64) {
        if !self.stack.borrow_mut().dismiss(id) {
            return;
        }
        self.rerender.emit(());

        let driver = self.clone();
        let remove = Timeout::new(REMOVE_DELAY_MS, move || {
            driver.stack.borrow_mut().remove(id);
            let finished = driver.timers.borrow_mut().remove(&id);
            // `finished` holds the timer running this closure.
            spawn_local(async move { drop(finished) });
            driver.rerender.emit(());
        });
        if let Some(timers) = self.timers.borrow_mut().get_mut(&id) {
            timers.remove = Some(remove);
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let rerender = use_force_update();
    let driver = use_memo((), move |_| {
        ToastDriver::new(Callback::from(move |_| rerender.force_update()))
    });

    let add_toast = {
        let driver = driver.clone();
        Callback::from(move |request: ToastRequest| {
            driver.add(request);
        })
    };

    let close_toast = {
        let driver = driver.clone();
        Callback::from(move |id: u64| driver.close(id))
    };

    let context = ToastContext {
        toasts: driver.toasts(),
        add_toast,
        close_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <ToastList />
        </ContextProvider<ToastContext>>
    }
}

#[hook]
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("Toast context not found")
}

#[function_component(ToastList)]
fn toast_list() -> Html {
    let toast_context = use_toast();

    html! {
        <div id="toast-container" class="toast-container">
            {toast_context.toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            }).collect::<Html>()}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toast_context = use_toast();

    let on_close = {
        let close_toast = toast_context.close_toast.clone();
        let toast_id = props.toast.id;
        Callback::from(move |_: MouseEvent| close_toast.emit(toast_id))
    };

    let kind = props.toast.kind;

    html! {
        <div class={classes!("toast", kind.class(), props.toast.is_visible().then_some("show"))}>
            <div class="toast-icon">{kind.icon()}</div>
            <div class="toast-message">{&props.toast.message}</div>
            <button class="toast-close" aria-label="Dismiss" onclick={on_close}>{"×"}</button>
        </div>
    }
}
