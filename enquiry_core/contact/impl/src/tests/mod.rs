use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use enquiry_core_contact_contracts::ContactFormService;
use enquiry_extern_contracts::form_sink::{FormPayload, MockFormSinkApiService};
use enquiry_models::contact::{ContactField, ContactRequest, FormVariant};
use enquiry_notify_contracts::MockNotificationService;

use crate::{ContactFormConfig, ContactFormProps, ContactFormServiceImpl, OnClose};

mod set_field;

type Sut = ContactFormServiceImpl<MockFormSinkApiService, MockNotificationService>;

fn make_sut(
    form_sink: MockFormSinkApiService,
    notify: MockNotificationService,
    props: ContactFormProps,
) -> Sut {
    ContactFormServiceImpl::new(form_sink, notify, ContactFormConfig::default(), props)
}

fn popup_props(on_close: Option<OnClose>) -> ContactFormProps {
    ContactFormProps {
        variant: FormVariant::Popup,
        on_close,
        ..Default::default()
    }
}

/// Types every editable field of `request` into the form.
fn fill(sut: &Sut, request: &ContactRequest) {
    for field in ContactField::ALL.into_iter().filter(|f| f.is_editable()) {
        sut.set_field(field, request.get(field).into()).unwrap();
    }
}

fn full_request() -> ContactRequest {
    ContactRequest {
        name: "Max Mustermann".into(),
        email: "max.mustermann@example.de".into(),
        contact_number: "0123456789".into(),
        address: "Musterstraße 1, Berlin".into(),
        query: "enquiry".into(),
        message: "Hello World!".into(),
    }
}

fn popup_request() -> ContactRequest {
    ContactRequest {
        address: String::new(),
        message: String::new(),
        ..full_request()
    }
}

fn payload(request: &ContactRequest) -> FormPayload {
    [
        ("entry.98504594", request.name.as_str()),
        ("entry.690186531", request.email.as_str()),
        ("entry.1369128842", request.contact_number.as_str()),
        ("entry.864243374", request.address.as_str()),
        ("entry.545556729", request.query.as_str()),
        ("entry.2011894093", request.message.as_str()),
    ]
    .into_iter()
    .collect()
}

/// Close callback counting its invocations.
fn counting_on_close() -> (OnClose, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let on_close: OnClose = {
        let calls = Arc::clone(&calls);
        Arc::new(move || {
            calls.fetch_add(1, Ordering::SeqCst);
        })
    };
    (on_close, calls)
}
