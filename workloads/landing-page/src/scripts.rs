//! Client-side behavior.
//!
//! The script mirrors the transitions in `state.rs`: menu toggle, service
//! modal, FAQ accordion and the contact form submission lifecycle.

use physio_content::ServiceCatalog;
use serde_json::json;

use crate::sections::CONTACT_ENDPOINT;
use crate::state::{FALLBACK_ERROR, SENDING_LABEL, SUBMIT_LABEL, SUCCESS_NOTICE_MS};

/// Viewport width at or below which following a nav link closes the menu.
const MOBILE_BREAKPOINT_PX: u32 = 968;

/// Render the page data block and the behavior script.
pub fn page_scripts(catalog: &ServiceCatalog) -> String {
    let data = json!({
        "services": catalog.descriptors_json(),
        "endpoint": CONTACT_ENDPOINT,
        "labels": { "submit": SUBMIT_LABEL, "sending": SENDING_LABEL },
        "fallbackError": FALLBACK_ERROR,
        "successNoticeMs": SUCCESS_NOTICE_MS,
        "mobileBreakpoint": MOBILE_BREAKPOINT_PX,
    });

    format!(
        "<script id=\"page-data\" type=\"application/json\">{}</script>\n<script>{}</script>\n",
        script_safe_json(&data),
        PAGE_SCRIPT
    )
}

/// Serialize JSON for embedding in a `<script>` element.
fn script_safe_json(value: &serde_json::Value) -> String {
    // `<` only occurs inside JSON strings, where `\u003c` is equivalent.
    value.to_string().replace('<', "\\u003c")
}

const PAGE_SCRIPT: &str = r##"
(function () {
    const data = JSON.parse(document.getElementById('page-data').textContent);

    // Menu
    const menu = document.getElementById('nav-links');
    const toggle = document.querySelector('.menu-toggle');
    function setMenu(open) {
        menu.classList.toggle('active', open);
        toggle.setAttribute('aria-expanded', String(open));
    }
    toggle.addEventListener('click', (e) => {
        e.preventDefault();
        setMenu(!menu.classList.contains('active'));
    });

    // Smooth scrolling for in-page anchors
    document.addEventListener('click', (e) => {
        const link = e.target.closest('a[href^="#"]');
        if (!link) return;
        const target = document.querySelector(link.getAttribute('href'));
        if (!target) return;
        e.preventDefault();
        target.scrollIntoView({ behavior: 'smooth', block: 'start' });
        if (window.innerWidth <= data.mobileBreakpoint) setMenu(false);
    });

    // Service modal
    const modal = document.getElementById('service-modal');
    const modalTitle = document.getElementById('modal-title');
    const modalBody = modal.querySelector('.modal-body');
    function list(items) {
        const ul = document.createElement('ul');
        items.forEach((item) => {
            const li = document.createElement('li');
            li.textContent = item;
            ul.appendChild(li);
        });
        return ul;
    }
    function heading(text) {
        const h = document.createElement('h4');
        h.textContent = text;
        return h;
    }
    function openModal(key) {
        const service = data.services[key];
        if (!service) return;
        modalTitle.textContent = service.title;
        const description = document.createElement('p');
        description.className = 'modal-description';
        description.textContent = service.description;
        modalBody.replaceChildren(
            description,
            heading('Conditions Treated:'),
            list(service.conditions),
            heading('Treatment Approaches:'),
            list(service.treatments)
        );
        modal.hidden = false;
        modal.classList.add('active');
    }
    function closeModal() {
        modal.classList.remove('active');
        modal.hidden = true;
        modalTitle.textContent = '';
        modalBody.replaceChildren();
    }
    document.querySelectorAll('.service-card').forEach((card) => {
        card.addEventListener('click', (e) => {
            e.preventDefault();
            openModal(card.dataset.service);
        });
    });
    modal.addEventListener('click', (e) => {
        if (e.target === modal || e.target.closest('.close-btn')) {
            e.preventDefault();
            closeModal();
        }
    });
    document.addEventListener('keydown', (e) => {
        if (e.key === 'Escape' && !modal.hidden) closeModal();
    });

    // FAQ accordion, one entry open at a time
    const questions = document.querySelectorAll('.faq-question');
    function setFaq(question, open) {
        question.setAttribute('aria-expanded', String(open));
        question.querySelector('.faq-indicator').textContent = open ? '−' : '+';
        question.nextElementSibling.classList.toggle('active', open);
    }
    questions.forEach((question) => {
        question.addEventListener('click', (e) => {
            e.preventDefault();
            const wasOpen = question.getAttribute('aria-expanded') === 'true';
            questions.forEach((q) => setFaq(q, false));
            if (!wasOpen) setFaq(question, true);
        });
    });

    // Contact form
    const form = document.getElementById('contact-form');
    const button = form.querySelector('button[type="submit"]');
    const success = form.querySelector('.form-success');
    const failure = form.querySelector('.form-error');
    let submitting = false;
    let successTimer = null;

    form.addEventListener('submit', async (e) => {
        e.preventDefault();
        if (submitting) return;
        submitting = true;
        button.disabled = true;
        button.textContent = data.labels.sending;
        failure.hidden = true;

        const payload = {
            name: form.elements.name.value,
            phone: form.elements.phone.value,
            email: form.elements.email.value,
            message: form.elements.message.value,
        };

        try {
            const response = await fetch(data.endpoint, {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify(payload),
            });
            const body = await response.json().catch(() => ({}));
            if (!response.ok) {
                throw new Error(body.error || data.fallbackError);
            }

            form.reset();
            success.hidden = false;
            clearTimeout(successTimer);
            successTimer = setTimeout(() => { success.hidden = true; }, data.successNoticeMs);
        } catch (error) {
            failure.querySelector('.notice-text').textContent =
                (error && error.message) || data.fallbackError;
            failure.hidden = false;
        } finally {
            submitting = false;
            button.disabled = false;
            button.textContent = data.labels.submit;
        }
    });
})();
"##;
