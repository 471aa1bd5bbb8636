pub const ISLAND_STYLES: &str = r#"
/* Project page */
.project {
  display: grid;
  grid-template-columns: minmax(0, 1fr) 14rem;
  gap: var(--space-8);
}

.project-title {
  font-size: 2.25rem;
  color: var(--accent);
}

.project-image {
  width: 100%;
  border-radius: var(--radius-lg);
  margin: var(--space-6) 0;
}

@media (max-width: 1023px) {
  .project {
    grid-template-columns: minmax(0, 1fr);
  }
}

/* Section navigation */
.spy-nav {
  position: sticky;
  top: var(--space-8);
  align-self: start;
  font-size: 0.875rem;
}

.spy-nav ul {
  list-style: none;
}

.spy-nav ul ul {
  padding-left: var(--space-4);
  border-left: 1px solid var(--border);
}

.spy-link {
  display: block;
  padding: var(--space-1) var(--space-2);
  color: var(--text-secondary);
}

.spy-link.active {
  color: var(--accent);
  font-weight: 600;
}

.spy-toggle {
  display: none;
}

@media (max-width: 1023px) {
  .spy-nav {
    position: fixed;
    top: auto;
    right: var(--space-4);
    bottom: var(--space-4);
    z-index: 20;
  }

  .spy-nav .spy-list {
    display: none;
  }

  .spy-nav.open .spy-list {
    display: block;
    padding: var(--space-4);
    border-radius: var(--radius-lg);
    background-color: var(--surface);
    box-shadow: var(--shadow-md);
  }

  .spy-toggle {
    display: inline-flex;
  }
}

/* Site preview */
.preview-notice {
  padding: var(--space-4);
  margin-bottom: var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
}

.preview-frame {
  width: 100%;
  height: 75vh;
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
}

/* Search boxes */
.search {
  width: 100%;
  padding: var(--space-3) var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
  font: inherit;
}

/* Colors page */
.color-row {
  display: grid;
  grid-template-columns: 6rem repeat(11, minmax(0, 1fr));
  gap: var(--space-1);
  margin-top: var(--space-2);
  align-items: center;
}

.swatch {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: var(--space-2) 0;
  border-radius: var(--radius-sm);
  font-size: 0.75rem;
  color: var(--neutral-900);
}

.swatch.light-text {
  color: #ffffff;
}

/* Icons page */
.icon-browser {
  display: grid;
  grid-template-columns: 14rem minmax(0, 1fr);
  gap: var(--space-6);
}

.icon-categories {
  list-style: none;
}

.icon-category {
  display: flex;
  justify-content: space-between;
  width: 100%;
  padding: var(--space-1) var(--space-2);
  border: none;
  border-radius: var(--radius-sm);
  background: none;
  color: var(--text-secondary);
  font: inherit;
  cursor: pointer;
}

.icon-category.active {
  color: var(--accent);
  background-color: var(--surface-muted);
}

.icon-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(4rem, 1fr));
  gap: var(--space-2);
  margin-top: var(--space-4);
}

.icon-tile {
  display: flex;
  align-items: center;
  justify-content: center;
  aspect-ratio: 1;
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
  cursor: pointer;
}

.icon-tile .icon {
  width: 1.5rem;
  height: 1.5rem;
}

.screen-alert {
  display: none;
}

@media (max-width: 767px) {
  .icon-browser {
    grid-template-columns: minmax(0, 1fr);
  }

  .icon-filters {
    display: none;
  }

  .icon-filters.open {
    display: block;
  }

  .screen-alert {
    display: block;
    margin-bottom: var(--space-4);
    color: var(--text-secondary);
  }
}
"#;
