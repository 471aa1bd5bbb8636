pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --accent: #3b82f6;
  --accent-strong: #2563eb;

  /* Neutrals */
  --neutral-50: #fafafa;
  --neutral-100: #f4f4f5;
  --neutral-200: #e4e4e7;
  --neutral-300: #d4d4d8;
  --neutral-400: #a1a1aa;
  --neutral-500: #71717a;
  --neutral-600: #52525b;
  --neutral-700: #3f3f46;
  --neutral-800: #27272a;
  --neutral-900: #18181b;
  --neutral-950: #09090b;

  /* Surfaces */
  --background: var(--neutral-50);
  --surface: #ffffff;
  --surface-muted: var(--neutral-100);
  --border: var(--neutral-200);

  /* Text */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-400);
  --log-text: rgba(24, 24, 27, 0.09);

  /* Spacing */
  --space-1: 0.25rem;
  --space-2: 0.5rem;
  --space-3: 0.75rem;
  --space-4: 1rem;
  --space-6: 1.5rem;
  --space-8: 2rem;
  --space-12: 3rem;

  /* Radius */
  --radius-sm: 0.25rem;
  --radius-md: 0.5rem;
  --radius-lg: 1rem;

  --sidebar-width: 16rem;
  --shadow-md: 0 4px 12px rgba(0, 0, 0, 0.08);
  --transition: 200ms ease;
}

html.dark {
  --background: var(--neutral-950);
  --surface: var(--neutral-900);
  --surface-muted: var(--neutral-800);
  --border: var(--neutral-800);
  --text-primary: var(--neutral-100);
  --text-secondary: var(--neutral-400);
  --text-tertiary: var(--neutral-600);
  --log-text: rgba(244, 244, 245, 0.07);
}
"#;
