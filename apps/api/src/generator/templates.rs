//! Text templates for every file of the generated Next.js project.
//!
//! JSX bodies are fixed per component; the only interpolated values are
//! identifiers we control and JSON produced by `serde_json`, so user text can
//! never break out of a string literal.

use serde_json::{json, Value};

use crate::generator::theme::Theme;
use crate::models::cv::{CvData, SectionKind};
use crate::models::selection::{ComponentSelection, SelectionPlan};
use crate::registry::ComponentType;

/// A JS/TS string literal for arbitrary text.
pub fn js_string(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Project scaffolding
// ────────────────────────────────────────────────────────────────────────────

pub fn package_json(project_name: &str) -> String {
    let manifest = json!({
        "name": project_name,
        "version": "0.1.0",
        "private": true,
        "scripts": {
            "dev": "next dev",
            "build": "next build",
            "start": "next start",
            "lint": "next lint"
        },
        "dependencies": {
            "@tabler/icons-react": "^3.11.0",
            "clsx": "^2.1.1",
            "framer-motion": "^11.3.0",
            "next": "14.2.5",
            "react": "^18.3.1",
            "react-dom": "^18.3.1",
            "tailwind-merge": "^2.4.0"
        },
        "devDependencies": {
            "@types/node": "^20",
            "@types/react": "^18",
            "@types/react-dom": "^18",
            "autoprefixer": "^10.4.19",
            "postcss": "^8",
            "tailwindcss": "^3.4.1",
            "typescript": "^5"
        }
    });
    format!("{manifest:#}\n")
}

pub fn tsconfig_json() -> String {
    let config = json!({
        "compilerOptions": {
            "target": "ES2017",
            "lib": ["dom", "dom.iterable", "esnext"],
            "allowJs": true,
            "skipLibCheck": true,
            "strict": true,
            "noEmit": true,
            "esModuleInterop": true,
            "module": "esnext",
            "moduleResolution": "bundler",
            "resolveJsonModule": true,
            "isolatedModules": true,
            "jsx": "preserve",
            "incremental": true,
            "plugins": [{ "name": "next" }],
            "paths": { "@/*": ["./*"] }
        },
        "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
        "exclude": ["node_modules"]
    });
    format!("{config:#}\n")
}

pub const NEXT_CONFIG: &str = r#"/** @type {import('next').NextConfig} */
const nextConfig = {
  images: {
    remotePatterns: [{ protocol: "https", hostname: "**" }],
  },
};

export default nextConfig;
"#;

pub const POSTCSS_CONFIG: &str = r#"/** @type {import('postcss-load-config').Config} */
const config = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
};

export default config;
"#;

pub fn tailwind_config(theme: &Theme) -> String {
    format!(
        r#"import type {{ Config }} from "tailwindcss";

const config: Config = {{
  darkMode: "class",
  content: [
    "./app/**/*.{{ts,tsx}}",
    "./components/**/*.{{ts,tsx}}",
  ],
  theme: {{
    extend: {{
      colors: {{
        accent: {accent},
        background: {background},
        foreground: {foreground},
        muted: {muted},
      }},
    }},
  }},
  plugins: [],
}};

export default config;
"#,
        accent = js_string(theme.accent),
        background = js_string(theme.background),
        foreground = js_string(theme.foreground),
        muted = js_string(theme.muted),
    )
}

pub const UTILS_TS: &str = r#"import { clsx, type ClassValue } from "clsx";
import { twMerge } from "tailwind-merge";

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs));
}
"#;

/// Plain list used whenever no richer component fits a section.
pub const SIMPLE_LIST_TSX: &str = r#"import { cn } from "@/lib/utils";

export type SimpleListItem = {
  primary: string;
  secondary?: string;
  tertiary?: string;
};

export function SimpleList({
  items,
  className,
}: {
  items: SimpleListItem[];
  className?: string;
}) {
  return (
    <ul className={cn("mx-auto max-w-3xl space-y-4", className)}>
      {items.map((item, idx) => (
        <li key={idx} className="rounded-lg border border-white/10 p-4">
          <p className="font-semibold">{item.primary}</p>
          {item.secondary ? <p className="text-sm opacity-80">{item.secondary}</p> : null}
          {item.tertiary ? <p className="mt-1 text-sm opacity-60">{item.tertiary}</p> : null}
        </li>
      ))}
    </ul>
  );
}
"#;

// ────────────────────────────────────────────────────────────────────────────
// App shell
// ────────────────────────────────────────────────────────────────────────────

pub fn layout_tsx(cv: &CvData, theme: &Theme) -> String {
    let title = format!("{} | Portfolio", cv.display_name());
    let description = cv
        .headline()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Portfolio of {}", cv.display_name()));

    let mut out = String::new();
    out.push_str("import type { Metadata } from \"next\";\n");
    out.push_str(&format!("import {{ {} }} from \"next/font/google\";\n", theme.font));
    out.push_str("import \"./globals.css\";\n\n");
    out.push_str(&format!(
        "const font = {}({{ subsets: [\"latin\"] }});\n\n",
        theme.font
    ));
    out.push_str("export const metadata: Metadata = {\n");
    out.push_str(&format!("  title: {},\n", js_string(&title)));
    out.push_str(&format!("  description: {},\n", js_string(&description)));
    out.push_str("};\n\n");
    out.push_str(
        "export default function RootLayout({\n  children,\n}: Readonly<{\n  children: React.ReactNode;\n}>) {\n",
    );
    out.push_str("  return (\n");
    out.push_str(&format!(
        "    <html lang=\"en\" className={}>\n",
        js_string(if theme.dark { "dark" } else { "light" })
    ));
    out.push_str("      <body className={font.className}>{children}</body>\n");
    out.push_str("    </html>\n");
    out.push_str("  );\n}\n");
    out
}

/// `app/page.tsx`: one element per selection, in plan order.
pub fn page_tsx(plan: &SelectionPlan) -> String {
    let mut out = String::new();
    for selection in &plan.selections {
        let name = selection.section.component_name();
        out.push_str(&format!(
            "import {name} from \"@/components/sections/{name}\";\n"
        ));
    }
    out.push_str("\nexport default function Home() {\n");
    out.push_str("  return (\n");
    out.push_str("    <main className=\"min-h-screen overflow-x-hidden\">\n");
    for selection in &plan.selections {
        out.push_str(&format!("      <{} />\n", selection.section.component_name()));
    }
    out.push_str("    </main>\n");
    out.push_str("  );\n}\n");
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Section files
// ────────────────────────────────────────────────────────────────────────────

/// `components/sections/<Name>Section.tsx` for one selection.
pub fn section_tsx(selection: &ComponentSelection, import_statement: &str) -> String {
    let section = selection.section;
    let name = section.component_name();
    let is_hero = section == SectionKind::Hero;

    let mut out = String::from("\"use client\";\n\n");
    out.push_str(import_statement);
    out.push('\n');
    if let Some(extra) = extra_imports(selection.component_type) {
        out.push_str(extra);
    }
    out.push_str(&format!("\nconst props = {:#};\n\n", selection.props));
    if let Some(helpers) = helpers(selection.component_type) {
        out.push_str(helpers);
        out.push('\n');
    }

    out.push_str(&format!("export default function {name}() {{\n"));
    out.push_str("  return (\n");
    out.push_str(&format!(
        "    <section id={} className=\"section\">\n",
        js_string(section.as_str())
    ));
    out.push_str("      <div className=\"mx-auto max-w-6xl px-4\">\n");
    if !is_hero {
        out.push_str("        <h2 className=\"section-heading\">{props.heading}</h2>\n");
    }
    for line in body(selection.component_type).lines() {
        out.push_str("        ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("      </div>\n");
    out.push_str("    </section>\n");
    out.push_str("  );\n}\n");
    out
}

fn extra_imports(component: ComponentType) -> Option<&'static str> {
    match component {
        ComponentType::FloatingDock => Some(
            "import {\n  IconBrandGithub,\n  IconBrandLinkedin,\n  IconBrandX,\n  IconMail,\n  IconPhone,\n  IconWorld,\n} from \"@tabler/icons-react\";\n",
        ),
        _ => None,
    }
}

fn helpers(component: ComponentType) -> Option<&'static str> {
    match component {
        ComponentType::FloatingDock => Some(
            r#"const ICONS: Record<string, React.ReactNode> = {
  mail: <IconMail className="h-full w-full" />,
  phone: <IconPhone className="h-full w-full" />,
  github: <IconBrandGithub className="h-full w-full" />,
  linkedin: <IconBrandLinkedin className="h-full w-full" />,
  twitter: <IconBrandX className="h-full w-full" />,
  globe: <IconWorld className="h-full w-full" />,
};
"#,
        ),
        _ => None,
    }
}

/// JSX rendering `props` with the selected component.
fn body(component: ComponentType) -> &'static str {
    match component {
        ComponentType::HeroHighlight => {
            r#"<HeroHighlight>
  <h1 className="text-center text-4xl font-bold md:text-6xl">{props.name}</h1>
  <p className="mt-4 text-center text-xl md:text-2xl">
    {props.title} <Highlight>{props.highlight}</Highlight>
  </p>
  <p className="mx-auto mt-6 max-w-2xl text-center opacity-80">{props.summary}</p>
</HeroHighlight>"#
        }
        ComponentType::Spotlight => {
            r#"<div className="relative flex min-h-[30rem] flex-col items-center justify-center">
  <Spotlight className="-top-40 left-0 md:-top-20 md:left-60" fill={props.fill} />
  <h1 className="text-center text-4xl font-bold md:text-7xl">{props.name}</h1>
  <p className="mt-4 text-center text-xl text-accent">{props.title}</p>
  <p className="mx-auto mt-6 max-w-2xl text-center opacity-80">{props.summary}</p>
</div>"#
        }
        ComponentType::HeroParallax => r#"<HeroParallax products={props.products} />"#,
        ComponentType::TextGenerateEffect => r#"<TextGenerateEffect words={props.words} />"#,
        ComponentType::Timeline => {
            r#"<Timeline
  data={props.data.map((entry) => ({
    title: entry.title,
    content: (
      <div>
        <h3 className="text-lg font-semibold">{entry.heading}</h3>
        <p className="text-sm opacity-80">{entry.subheading}</p>
        <p className="mt-2">{entry.description}</p>
      </div>
    ),
  }))}
/>"#
        }
        ComponentType::TracingBeam => {
            r#"<TracingBeam>
  <div className="mx-auto max-w-2xl space-y-12">
    {props.items.map((item, idx) => (
      <div key={idx}>
        {item.badge ? (
          <span className="rounded-full bg-accent px-3 py-1 text-xs text-background">{item.badge}</span>
        ) : null}
        <h3 className="mt-3 text-xl font-semibold">{item.title}</h3>
        <p className="mt-2 opacity-80">{item.description}</p>
      </div>
    ))}
  </div>
</TracingBeam>"#
        }
        ComponentType::StickyScrollReveal => r#"<StickyScroll content={props.content} />"#,
        ComponentType::BentoGrid => {
            r#"<BentoGrid>
  {props.items.map((item, idx) => (
    <BentoGridItem
      key={idx}
      title={item.title}
      description={item.description}
      header={<img src={item.header} alt={item.title} className="h-32 w-full rounded-xl object-cover" />}
      className={item.className}
    />
  ))}
</BentoGrid>"#
        }
        ComponentType::CardHoverEffect => r#"<HoverEffect items={props.items} />"#,
        ComponentType::FocusCards => r#"<FocusCards cards={props.cards} />"#,
        ComponentType::ExpandableCard => r#"<ExpandableCard cards={props.cards} />"#,
        ComponentType::AppleCardsCarousel => {
            r#"<Carousel
  items={props.items.map((card, idx) => (
    <Card key={idx} card={card} index={idx} />
  ))}
/>"#
        }
        ComponentType::ThreeDCard => {
            r#"<div className="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3">
  {props.cards.map((card, idx) => (
    <CardContainer key={idx}>
      <CardBody className="h-auto w-full rounded-xl border border-white/10 p-6">
        <CardItem translateZ="50" className="text-xl font-bold">
          {card.title}
        </CardItem>
        <CardItem as="p" translateZ="60" className="mt-2 text-sm opacity-80">
          {card.description}
        </CardItem>
        <CardItem translateZ="100" className="mt-4 w-full">
          <img src={card.image} alt={card.title} className="h-48 w-full rounded-xl object-cover" />
        </CardItem>
        <CardItem as="a" href={card.link} translateZ={20} className="mt-4 text-sm text-accent">
          View →
        </CardItem>
      </CardBody>
    </CardContainer>
  ))}
</div>"#
        }
        ComponentType::InfiniteMovingCards => {
            r#"<InfiniteMovingCards
  items={props.items}
  direction={props.direction as "left" | "right"}
  speed={props.speed as "fast" | "normal" | "slow"}
/>"#
        }
        ComponentType::AnimatedTestimonials => {
            r#"<AnimatedTestimonials testimonials={props.testimonials} autoplay={props.autoplay} />"#
        }
        ComponentType::AnimatedTooltip => {
            r#"<div className="flex w-full flex-row items-center justify-center">
  <AnimatedTooltip items={props.items} />
</div>"#
        }
        ComponentType::Tabs => {
            r#"<div className="relative flex h-[30rem] w-full flex-col items-start justify-start [perspective:1000px]">
  <Tabs
    tabs={props.tabs.map((tab) => ({
      title: tab.title,
      value: tab.value,
      content: (
        <div className="w-full rounded-2xl border border-white/10 bg-background p-8">
          <h3 className="text-2xl font-bold">{tab.title}</h3>
          <p className="mt-4 opacity-80">{tab.description}</p>
        </div>
      ),
    }))}
  />
</div>"#
        }
        ComponentType::LayoutGrid => {
            r#"<div className="h-screen w-full">
  <LayoutGrid
    cards={props.cards.map((card) => ({
      id: card.id,
      className: card.className,
      thumbnail: card.thumbnail,
      content: (
        <div>
          <p className="text-xl font-bold text-white">{card.title}</p>
          <p className="mt-2 text-neutral-200">{card.description}</p>
        </div>
      ),
    }))}
  />
</div>"#
        }
        ComponentType::WobbleCard => {
            r#"<div className="grid grid-cols-1 gap-4 lg:grid-cols-2">
  {props.cards.map((card, idx) => (
    <WobbleCard key={idx} containerClassName={card.className}>
      <h3 className="text-xl font-semibold text-white">{card.title}</h3>
      <p className="mt-4 text-neutral-200">{card.description}</p>
    </WobbleCard>
  ))}
</div>"#
        }
        ComponentType::FloatingDock => {
            r#"<div className="flex items-center justify-center">
  <FloatingDock
    items={props.items.map((item) => ({
      title: item.title,
      href: item.href,
      icon: ICONS[item.icon] ?? ICONS.globe,
    }))}
  />
</div>"#
        }
        ComponentType::SimpleList => r#"<SimpleList items={props.items} />"#,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Data + docs
// ────────────────────────────────────────────────────────────────────────────

/// `data/portfolio.json`: everything the page renders, in page order.
pub fn portfolio_json(cv: &CvData, plan: &SelectionPlan, build_id: &str) -> String {
    let sections: Vec<Value> = plan
        .selections
        .iter()
        .map(|s| {
            json!({
                "section": s.section,
                "component": s.component_type,
                "priority": s.priority,
                "props": s.props,
            })
        })
        .collect();
    let document = json!({
        "build_id": build_id,
        "name": cv.display_name(),
        "archetype": plan.profile.archetype,
        "strategy": plan.strategy,
        "sections": sections,
    });
    format!("{document:#}\n")
}

pub fn readme(cv: &CvData, plan: &SelectionPlan, build_id: &str, generated_at: &str) -> String {
    let mut out = format!("# {} | Portfolio\n\n", cv.display_name());
    out.push_str("Generated Next.js portfolio.\n\n");
    out.push_str(&format!("- Build: `{build_id}`\n"));
    out.push_str(&format!("- Generated at: {generated_at}\n"));
    out.push_str(&format!("- Archetype: {}\n", plan.profile.archetype.as_str()));
    out.push_str(&format!("- Selector: {}\n", plan.strategy));
    out.push_str(&format!("- Density: {}\n\n", plan.density.as_str()));

    out.push_str("## Sections\n\n");
    out.push_str("| Section | Component | Items |\n");
    out.push_str("|---------|-----------|-------|\n");
    for s in &plan.selections {
        out.push_str(&format!(
            "| {} | `{}` | {} |\n",
            s.section.title(),
            s.component_type,
            s.item_count
        ));
    }

    out.push_str("\n## UI components\n\n");
    out.push_str("Add these components under `components/ui/` before building:\n\n");
    let mut paths: Vec<&str> = plan
        .selections
        .iter()
        .filter(|s| s.component_type != ComponentType::SimpleList)
        .map(|s| s.import_path.as_str())
        .collect();
    paths.sort_unstable();
    paths.dedup();
    for path in paths {
        out.push_str(&format!("- `{path}`\n"));
    }

    out.push_str("\n## Run\n\n```bash\nnpm install\nnpm run dev\n```\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes_quotes_and_newlines() {
        assert_eq!(js_string("say \"hi\"\n"), r#""say \"hi\"\n""#);
    }

    #[test]
    fn test_package_json_is_valid_json() {
        let parsed: Value = serde_json::from_str(&package_json("ada-portfolio")).unwrap();
        assert_eq!(parsed["name"], "ada-portfolio");
        assert!(parsed["dependencies"]["next"].is_string());
    }

    #[test]
    fn test_every_component_has_a_body() {
        for component in ComponentType::ALL {
            assert!(!body(component).is_empty(), "{component} has no body");
        }
    }

    #[test]
    fn test_layout_escapes_metadata() {
        let cv: CvData = serde_json::from_value(json!({
            "hero": { "name": "Ada \"Countess\" Lovelace", "title": "Analyst" }
        }))
        .unwrap();
        let layout = layout_tsx(&cv, &Theme::for_archetype(crate::selection::archetype::Archetype::General));
        assert!(layout.contains(r#"title: "Ada \"Countess\" Lovelace | Portfolio","#));
        assert!(layout.contains("import { Inter } from \"next/font/google\";"));
    }
}
