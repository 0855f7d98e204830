//! Page stylesheet, inlined into the shell head.

pub const PAGE_STYLES: &str = r##"
:root {
    --primary: #2563eb;
    --primary-light: #3b82f6;
    --accent: #8b5cf6;
    --heading: #1e293b;
    --text: #1a1a1a;
    --text-muted: #64748b;
    --text-soft: #475569;
    --border: #e2e8f0;
    --bg-alt: #f8fafc;
    --serif: Georgia, 'Times New Roman', serif;
    --button: linear-gradient(135deg, #3b82f6 0%, #2563eb 100%);
}

* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    line-height: 1.6;
    color: var(--text);
    background: #ffffff;
}

/* Nav */
nav {
    background: rgba(255, 255, 255, 0.98);
    backdrop-filter: blur(10px);
    position: sticky;
    top: 0;
    z-index: 100;
    border-bottom: 1px solid #e8e8e8;
    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.04);
}
.nav-container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1.25rem 2rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
    position: relative;
}
.logo { font-family: Georgia, serif; font-size: 1.5rem; font-weight: 600; color: var(--primary); }
.nav-links { display: flex; gap: 2rem; list-style: none; }
.nav-links a { color: #4b5563; text-decoration: none; font-weight: 500; transition: color 0.3s; }
.nav-links a:hover { color: var(--primary); }
.menu-toggle { display: none; font-size: 1.5rem; color: var(--heading); text-decoration: none; }

/* Hero */
.hero {
    max-width: 1200px;
    margin: 0 auto;
    padding: 5rem 2rem;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
    align-items: center;
}
.hero-content h1 {
    font-family: var(--serif);
    font-size: 3.5rem;
    line-height: 1.15;
    margin-bottom: 1.5rem;
    font-weight: 500;
    color: var(--heading);
}
.hero-content .highlight { color: var(--primary); }
.hero-content p { font-size: 1.25rem; color: var(--text-muted); margin-bottom: 2rem; line-height: 1.7; }
.credentials { display: flex; gap: 1rem; margin-bottom: 2rem; flex-wrap: wrap; }
.credential-badge {
    background: #eff6ff;
    color: #1e40af;
    padding: 0.5rem 1rem;
    border-radius: 20px;
    font-size: 0.9rem;
    font-weight: 600;
    border: 1px solid #bfdbfe;
}
.cta-button {
    background: var(--button);
    color: white;
    padding: 1rem 2rem;
    border-radius: 12px;
    font-size: 1.05rem;
    font-weight: 600;
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    text-decoration: none;
    transition: all 0.3s;
    box-shadow: 0 4px 12px rgba(37, 99, 235, 0.3);
}
.cta-button:hover { transform: translateY(-2px); box-shadow: 0 6px 20px rgba(37, 99, 235, 0.4); }
.hero-image { height: 500px; border-radius: 20px; overflow: hidden; box-shadow: 0 20px 60px rgba(0, 0, 0, 0.15); }
.hero-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s; }
.hero-image:hover img { transform: scale(1.05); }

/* Trust strip */
.trust-section { background: linear-gradient(135deg, #f0f9ff 0%, #e0f2fe 100%); padding: 4rem 2rem; }
.trust-container {
    max-width: 1100px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 2rem;
}
.trust-card {
    background: white;
    padding: 2rem;
    border-radius: 16px;
    display: flex;
    align-items: center;
    gap: 1.25rem;
    transition: all 0.3s;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.05);
    border: 1px solid rgba(37, 99, 235, 0.1);
}
.trust-card:hover { box-shadow: 0 8px 24px rgba(37, 99, 235, 0.15); transform: translateY(-4px); }
.trust-icon { font-size: 2.5rem; }
.trust-card strong { color: var(--heading); font-size: 1.05rem; }
.trust-detail { font-size: 0.9rem; color: var(--text-muted); }

/* Shared section headings */
.section-wrapper { max-width: 1200px; margin: 0 auto; padding: 6rem 2rem; }
.section-intro { max-width: 1200px; margin: 0 auto; }
.section-title {
    font-family: var(--serif);
    font-size: 2.75rem;
    margin-bottom: 1rem;
    font-weight: 500;
    color: var(--heading);
    text-align: center;
}
.section-subtitle {
    text-align: center;
    color: var(--text-muted);
    font-size: 1.15rem;
    max-width: 700px;
    margin: 0 auto 4rem;
}

/* Services */
.services-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 2rem; }
.service-card {
    display: block;
    background: white;
    padding: 2rem;
    border-radius: 16px;
    border: 2px solid var(--border);
    color: inherit;
    text-decoration: none;
    transition: all 0.3s;
    position: relative;
    overflow: hidden;
}
.service-card::before {
    content: '';
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    height: 4px;
    background: linear-gradient(90deg, var(--primary-light), var(--accent));
    transform: scaleX(0);
    transition: transform 0.3s;
}
.service-card:hover::before { transform: scaleX(1); }
.service-card:hover { border-color: var(--primary-light); box-shadow: 0 12px 32px rgba(37, 99, 235, 0.15); transform: translateY(-6px); }
.service-icon { font-size: 2.5rem; margin-bottom: 1rem; }
.service-card h3 { font-size: 1.4rem; margin-bottom: 0.75rem; font-weight: 600; color: var(--heading); }
.service-card p { color: var(--text-muted); margin-bottom: 1rem; }
.service-card .click-hint { font-size: 0.9rem; color: var(--primary-light); font-weight: 500; }

/* Conditions */
.conditions-section { background: var(--bg-alt); padding: 6rem 2rem; }
.conditions-grid { max-width: 1200px; margin: 3rem auto 0; display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
.condition-category { background: white; padding: 2rem; border-radius: 16px; border: 2px solid var(--border); }
.condition-category h3 { color: var(--heading); font-size: 1.3rem; margin-bottom: 1rem; font-weight: 600; }
.condition-category ul { list-style: none; }
.condition-category li { padding: 0.5rem 0; color: var(--text-soft); border-bottom: 1px solid #f1f5f9; }
.condition-category li:last-child { border-bottom: none; }

/* Approach */
.approach-section { max-width: 1200px; margin: 0 auto; padding: 6rem 2rem; }
.approach-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; margin-top: 3rem; }
.approach-card {
    background: linear-gradient(135deg, #ffffff 0%, var(--bg-alt) 100%);
    padding: 2.5rem;
    border-radius: 16px;
    border: 2px solid var(--border);
}
.approach-card h3 { font-size: 1.5rem; color: var(--heading); margin-bottom: 1rem; font-weight: 600; }
.approach-card p { color: var(--text-muted); line-height: 1.8; margin-bottom: 1rem; }
.approach-card ul { list-style: none; }
.approach-card li { color: var(--text-soft); padding: 0.5rem 0 0.5rem 1.5rem; position: relative; }
.approach-card li::before { content: '\2192'; position: absolute; left: 0; color: var(--primary-light); }

/* Process */
.process-section { background: linear-gradient(135deg, #eff6ff 0%, #dbeafe 100%); padding: 6rem 2rem; }
.process-container { max-width: 1100px; margin: 0 auto; }
.process-steps { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; margin-top: 3rem; }
.process-step { background: white; padding: 2rem; border-radius: 16px; text-align: center; border: 2px solid var(--border); }
.process-number {
    width: 50px;
    height: 50px;
    background: linear-gradient(135deg, var(--primary-light), var(--accent));
    color: white;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    font-weight: 700;
    margin: 0 auto 1rem;
}
.process-step h4 { font-size: 1.2rem; color: var(--heading); margin-bottom: 0.75rem; }
.process-step p { color: var(--text-muted); font-size: 0.95rem; }

/* FAQ */
.faq-section { background: var(--bg-alt); padding: 6rem 2rem; }
.faq-container { max-width: 900px; margin: 0 auto; }
.faq-item { background: white; margin-bottom: 1rem; border-radius: 12px; border: 2px solid var(--border); overflow: hidden; }
.faq-question {
    padding: 1.5rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
    font-weight: 600;
    color: var(--heading);
    font-size: 1.1rem;
    text-decoration: none;
}
.faq-question:hover { background: var(--bg-alt); }
.faq-answer { padding: 0 1.5rem 1.5rem; color: var(--text-muted); line-height: 1.7; display: none; }
.faq-answer.active { display: block; }

/* Contact */
.contact-section { background: linear-gradient(135deg, #1e293b 0%, #0f172a 100%); color: #f1f5f9; padding: 6rem 2rem; }
.contact-container { max-width: 1100px; margin: 0 auto; display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; }
.contact-info h2 { font-family: var(--serif); font-size: 2.5rem; margin-bottom: 1.5rem; font-weight: 500; }
.contact-info p { color: #cbd5e1; margin-bottom: 2.5rem; font-size: 1.15rem; line-height: 1.7; }
.contact-details { display: flex; flex-direction: column; gap: 1.5rem; }
.contact-item { display: flex; align-items: center; gap: 1rem; font-size: 1.1rem; }
.contact-item a { color: #f1f5f9; text-decoration: none; }
.coverage-area { margin-top: 2rem; padding: 1.5rem; background: rgba(255, 255, 255, 0.1); border-radius: 12px; }
.coverage-area h4 { margin-bottom: 1rem; font-size: 1.2rem; }
.coverage-area p { font-size: 1rem; margin-bottom: 1rem; }
.contact-form { background: white; padding: 2.5rem; border-radius: 20px; box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3); }
.contact-form input,
.contact-form textarea {
    width: 100%;
    padding: 1rem;
    margin-bottom: 1.25rem;
    border: 2px solid var(--border);
    border-radius: 12px;
    font-family: inherit;
    font-size: 1rem;
    transition: all 0.3s;
}
.contact-form input:focus,
.contact-form textarea:focus { outline: none; border-color: var(--primary-light); box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.1); }
.contact-form textarea { min-height: 140px; resize: vertical; }
.contact-form button {
    width: 100%;
    background: var(--button);
    color: white;
    padding: 1rem;
    border: none;
    border-radius: 12px;
    font-size: 1.05rem;
    font-weight: 600;
    cursor: pointer;
    transition: all 0.3s;
    box-shadow: 0 4px 12px rgba(37, 99, 235, 0.3);
}
.contact-form button:hover:not(:disabled) { transform: translateY(-2px); box-shadow: 0 6px 20px rgba(37, 99, 235, 0.4); }
.contact-form button:disabled { opacity: 0.6; cursor: not-allowed; }
.form-notice { padding: 1rem; margin-bottom: 1.5rem; border-radius: 12px; text-align: center; font-weight: 600; }
.form-error { background: #fee2e2; color: #991b1b; border: 2px solid #ef4444; }
.form-success { background: #d1fae5; color: #065f46; border: 2px solid #10b981; }
.form-footnote { margin-top: 1rem; font-size: 0.85rem; color: var(--text-muted); text-align: center; }

/* Footer */
footer {
    text-align: center;
    padding: 2.5rem;
    font-size: 0.95rem;
    color: var(--text-muted);
    background: var(--bg-alt);
    border-top: 1px solid var(--border);
}
.footer-registrations { margin-top: 0.5rem; }
.footer-copyright { margin-top: 1rem; }

/* Service modal */
.modal {
    display: none;
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    backdrop-filter: blur(4px);
    z-index: 1000;
    align-items: center;
    justify-content: center;
    padding: 2rem;
}
.modal.active { display: flex; }
.modal-content {
    background: white;
    padding: 2.5rem;
    border-radius: 20px;
    max-width: 600px;
    width: 100%;
    max-height: 80vh;
    overflow-y: auto;
    animation: modalFadeIn 0.3s ease;
    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
}
@keyframes modalFadeIn {
    from { opacity: 0; transform: scale(0.9) translateY(20px); }
    to { opacity: 1; transform: scale(1) translateY(0); }
}
.modal-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1.5rem; }
.modal-header h3 { font-family: var(--serif); font-size: 1.75rem; font-weight: 500; color: var(--heading); }
.close-btn {
    background: #f1f5f9;
    color: var(--heading);
    font-size: 1.5rem;
    line-height: 1;
    border-radius: 8px;
    width: 36px;
    height: 36px;
    display: flex;
    align-items: center;
    justify-content: center;
    text-decoration: none;
    transition: all 0.3s;
}
.close-btn:hover { background: var(--border); }
.modal-description { color: var(--text-muted); margin-bottom: 1.5rem; }
.modal-body h4 { color: var(--heading); font-size: 1.2rem; margin: 1.5rem 0 1rem; font-weight: 600; }
.modal-body ul { list-style: none; }
.modal-body li { color: var(--text-soft); margin-bottom: 0.75rem; padding-left: 1.5rem; position: relative; }
.modal-body li::before { content: '\2713'; position: absolute; left: 0; color: var(--primary-light); font-weight: bold; }

/* Responsive */
@media (max-width: 968px) {
    .hero { grid-template-columns: 1fr; padding: 4rem 1.5rem; gap: 3rem; }
    .hero-content h1 { font-size: 2.5rem; }
    .hero-image { height: 400px; }
    .contact-container,
    .approach-grid { grid-template-columns: 1fr; gap: 3rem; }
    .conditions-grid,
    .process-steps { grid-template-columns: repeat(2, 1fr); }
    .nav-links { display: none; }
    .menu-toggle { display: block; }
    .nav-links.active {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        background: white;
        padding: 1rem 2rem;
        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
    }
}

@media (max-width: 640px) {
    .hero-content h1 { font-size: 2rem; }
    .section-title { font-size: 2rem; }
    .hero-image { height: 300px; }
    .conditions-grid,
    .process-steps,
    .services-grid,
    .trust-container { grid-template-columns: 1fr; }
}
"##;
