pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
  font: inherit;
  cursor: pointer;
  transition: background-color var(--transition);
}

.btn:hover {
  background-color: var(--surface-muted);
  text-decoration: none;
}

.btn-icon {
  padding: var(--space-2);
}

.btn-primary {
  background-color: var(--accent);
  border-color: var(--accent);
  color: #ffffff;
}

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
}

.icon {
  width: 1.25rem;
  height: 1.25rem;
  flex-shrink: 0;
}

/* Hero */
.hero {
  min-height: 90vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  gap: var(--space-6);
}

.hero-title {
  font-size: clamp(2rem, 5vw, 3.5rem);
  line-height: 1.1;
}

.hero-content p + p {
  margin-top: var(--space-3);
}

.scroll-arrow {
  align-self: center;
  animation: bounce 2s infinite;
}

@keyframes bounce {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(0.5rem); }
}

/* Sections */
.content-section {
  scroll-margin-top: 6rem;
  padding: var(--space-12) 0;
}

.content-section h2 {
  font-size: 1.875rem;
  margin-bottom: var(--space-6);
}

.content-section h3 {
  font-size: 1.25rem;
  margin: var(--space-6) 0 var(--space-3);
}

.rich p + p,
.rich p + ul,
.rich ul + p {
  margin-top: var(--space-3);
}

.rich ul {
  padding-left: var(--space-6);
}

.rich code {
  padding: 0 var(--space-1);
  border-radius: var(--radius-sm);
  background-color: var(--surface-muted);
}

.note {
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

/* Cards */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
  gap: var(--space-6);
}

.card {
  display: flex;
  flex-direction: column;
  overflow: hidden;
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
}

.card img {
  width: 100%;
  aspect-ratio: 16 / 9;
  object-fit: cover;
}

.card-body {
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
  padding: var(--space-4);
}

.card-title {
  font-size: 1.125rem;
  font-weight: 600;
}

.card img.card-image-dark {
  object-fit: contain;
  padding: var(--space-4);
  background-color: var(--neutral-900);
}

.contact-list {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-3);
  margin-top: var(--space-4);
  list-style: none;
}

.contact-list .btn {
  background-color: var(--contact, var(--neutral-600));
  color: #ffffff;
}

/* Not found */
.not-found {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-4);
  padding: var(--space-8) 0;
  text-align: center;
}

/* Copy block */
.copy-block {
  position: relative;
  margin: var(--space-3) 0;
}

.copy-block pre {
  overflow-x: auto;
  padding: var(--space-4);
  border-radius: var(--radius-md);
  background-color: var(--neutral-900);
  color: var(--neutral-100);
  font-size: 0.875rem;
}

.copy-block .btn {
  position: absolute;
  top: var(--space-2);
  right: var(--space-2);
}

.copy-inline {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
}

.toast {
  position: fixed;
  bottom: var(--space-6);
  right: var(--space-6);
  z-index: 50;
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-md);
  background-color: var(--neutral-900);
  color: #ffffff;
  box-shadow: var(--shadow-md);
}

/* Fade in, only with scripting enabled */
html.js .fade {
  opacity: 0;
  transform: translateY(1rem);
  transition: opacity 600ms ease, transform 600ms ease;
}

html.js .fade.visible {
  opacity: 1;
  transform: none;
}

/* Modal */
.modal-backdrop {
  position: fixed;
  inset: 0;
  z-index: 40;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: rgba(0, 0, 0, 0.5);
}

.modal {
  width: min(32rem, 90vw);
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: var(--space-4);
}

.modal dl {
  display: grid;
  grid-template-columns: auto 1fr;
  gap: var(--space-2) var(--space-4);
}

.modal dt {
  color: var(--text-secondary);
}
"#;
