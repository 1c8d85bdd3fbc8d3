//! Starter configuration written by `blueprint init`.

use crate::config::types::{Blueprint, BlueprintConfig, FileSpec};

const ARROW_COMPONENT: &str = "import React from 'react';
import styles from './{{Name_kebabCase}}.module.css';

const {{Name_pascalCase}} = () => {
  return <div className={styles.root}>{{Name_pascalCase}}</div>;
};

export default {{Name_pascalCase}};";

const NAMED_EXPORT_COMPONENT: &str = "import React from 'react';
import styles from './{{Name_kebabCase}}.module.css';

export const {{Name_pascalCase}} = () => <div className={styles.root}>{{Name_pascalCase}}</div>;";

const CLASS_COMPONENT: &str = "import React, { Component } from 'react';
import styles from './{{Name_kebabCase}}.module.css';

export class {{Name_pascalCase}} extends Component {
  render() {
    return <div className={styles.root}>{{Name_pascalCase}}</div>;
  }
}";

const HOOK: &str = "import { useState } from 'react';

export function use{{Name_pascalCase}}() {
  const [state, setState] = useState(null);
  // logic here
  return state;
}";

const STYLESHEET: &str = ".root { }";

fn component(source: &str) -> Blueprint {
    Blueprint {
        files: vec![
            FileSpec::new("{{Name_pascalCase}}/index.tsx", source),
            FileSpec::new("{{Name_pascalCase}}/{{Name_kebabCase}}.module.css", STYLESHEET),
        ],
    }
}

/// Four example blueprints: arrow-function, named-export and class components, and a hook.
pub fn starter_config() -> BlueprintConfig {
    let mut config = BlueprintConfig::new();
    config.insert("reactArrowComponent", component(ARROW_COMPONENT));
    config.insert("reactNamedExportComponent", component(NAMED_EXPORT_COMPONENT));
    config.insert("reactClassComponent", component(CLASS_COMPONENT));
    config.insert(
        "reactHook",
        Blueprint { files: vec![FileSpec::new("hooks/use{{Name_pascalCase}}.ts", HOOK)] },
    );
    config
}

/// Starter configuration as pretty-printed JSON (two-space indent).
pub fn starter_config_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&starter_config())
}
