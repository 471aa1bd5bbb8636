pub const LAYOUT_STYLES: &str = r#"
/* Page frame */
.page {
  position: relative;
  min-height: 100vh;
  padding-left: var(--sidebar-width);
}

.page-main {
  position: relative;
  z-index: 1;
  max-width: 64rem;
  margin: 0 auto;
  padding: var(--space-8) var(--space-6);
}

@media (max-width: 1023px) {
  .page {
    padding-left: 0;
  }
}

/* Sidebar */
.sidebar {
  position: fixed;
  inset: 0 auto 0 0;
  z-index: 20;
  width: var(--sidebar-width);
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
  padding: var(--space-6) var(--space-4);
  background-color: var(--surface);
  border-right: 1px solid var(--border);
  transition: transform var(--transition);
}

.sidebar-brand {
  font-weight: 700;
  font-size: 1.125rem;
  color: var(--text-primary);
}

.sidebar-menu {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
  list-style: none;
}

.sidebar-link {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  color: var(--text-secondary);
}

.sidebar-link:hover {
  background-color: var(--surface-muted);
  text-decoration: none;
}

.sidebar-link.active {
  color: var(--accent-strong);
  background-color: var(--surface-muted);
  font-weight: 600;
}

.sidebar-tools {
  margin-top: auto;
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.sidebar-toggle {
  display: none;
  position: fixed;
  top: var(--space-4);
  left: var(--space-4);
  z-index: 30;
}

@media (max-width: 1023px) {
  .sidebar {
    transform: translateX(-100%);
  }

  .sidebar.open {
    transform: translateX(0);
  }

  .sidebar-toggle {
    display: inline-flex;
  }
}

/* Decorative log background */
.log-background {
  position: fixed;
  inset: 0;
  z-index: 0;
  overflow: hidden;
  pointer-events: none;
  user-select: none;
  font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
  font-size: 0.75rem;
  line-height: 16px;
  color: var(--log-text);
  white-space: pre;
}

@media (min-width: 1024px) {
  .log-background {
    font-size: 0.875rem;
    line-height: 26px;
  }
}

.log-prompt {
  font-weight: 700;
}

/* Footer */
.footer {
  position: relative;
  z-index: 1;
  padding: var(--space-8) var(--space-6);
  text-align: center;
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.footer-credits {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: var(--space-3);
  margin-top: var(--space-2);
}
"#;
