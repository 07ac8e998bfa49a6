use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=wrapper.cpp");
    println!("cargo:rerun-if-env-changed=GLFW_INCLUDE_DIR");
    println!("cargo:rerun-if-env-changed=DEAR_IMGUI_GLFW_SKIP_CC");

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    // Hosts that already link their own copy of the backends only need the
    // link directives below.
    if env::var("DEAR_IMGUI_GLFW_SKIP_CC").is_err() {
        build_backends();
    }

    link_platform_libraries(&target_os);
}

fn build_backends() {
    // Upstream Dear ImGui core headers and the stock backend sources come from
    // the tree that dear-imgui-sys builds against.
    let imgui_root = env::var("DEP_DEAR_IMGUI_THIRD_PARTY")
        .or_else(|_| env::var("DEP_DEAR_IMGUI_IMGUI_INCLUDE_PATH"))
        .expect(
            "DEP_DEAR_IMGUI_THIRD_PARTY or DEP_DEAR_IMGUI_IMGUI_INCLUDE_PATH not set. \
             Make sure dear-imgui-sys is built before dear-imgui-glfw.",
        );
    let imgui_root = PathBuf::from(imgui_root);
    let backends = imgui_root.join("backends");

    let mut build = cc::Build::new();
    build.cpp(true).std("c++17");
    build.include(&imgui_root);
    build.include(&backends);

    // GLFW includes:
    //
    // 1. Allow explicit override via GLFW_INCLUDE_DIR.
    // 2. Try pkg-config "glfw3".
    // 3. Try a few common default locations (Homebrew, /usr/local).
    let mut have_glfw_headers = false;

    if let Ok(dir) = env::var("GLFW_INCLUDE_DIR") {
        build.include(&dir);
        have_glfw_headers = true;
        println!("cargo:warning=dear-imgui-glfw: using GLFW_INCLUDE_DIR={dir}");
    } else if let Ok(lib) = pkg_config::Config::new()
        .cargo_metadata(false)
        .probe("glfw3")
    {
        for p in lib.include_paths {
            build.include(&p);
        }
        have_glfw_headers = true;
    } else {
        let candidates = [
            "/opt/homebrew/include",
            "/usr/local/include",
            "/opt/local/include",
            "/usr/include",
        ];
        for c in candidates {
            if PathBuf::from(c).join("GLFW/glfw3.h").exists() {
                build.include(c);
                have_glfw_headers = true;
                break;
            }
        }
    }

    if !have_glfw_headers {
        panic!(
            "dear-imgui-glfw: could not find GLFW headers. \
             Install GLFW development files (e.g. `apt install libglfw3-dev` or `brew install glfw`), \
             or set GLFW_INCLUDE_DIR to the directory containing GLFW/glfw3.h."
        );
    }

    build.file(backends.join("imgui_impl_glfw.cpp"));
    build.file(backends.join("imgui_impl_opengl3.cpp"));

    // C entry points used by the Rust FFI (see wrapper.cpp).
    build.file("wrapper.cpp");

    build.compile("dear-imgui-glfw-backend");
}

fn link_platform_libraries(target_os: &str) {
    // GLFW itself: pkg-config emits the right search path and library name when
    // available; otherwise fall back to the conventional name.
    let probed = pkg_config::Config::new().probe("glfw3").is_ok();
    if !probed {
        match target_os {
            "windows" => println!("cargo:rustc-link-lib=dylib=glfw3"),
            _ => println!("cargo:rustc-link-lib=dylib=glfw"),
        }
    }

    match target_os {
        "linux" => {
            println!("cargo:rustc-link-lib=dylib=GL");
            println!("cargo:rustc-link-lib=dylib=dl");
        }
        "macos" => {
            println!("cargo:rustc-link-lib=framework=OpenGL");
            println!("cargo:rustc-link-lib=framework=Cocoa");
            println!("cargo:rustc-link-lib=framework=IOKit");
            println!("cargo:rustc-link-lib=framework=CoreVideo");
        }
        "windows" => {
            println!("cargo:rustc-link-lib=dylib=opengl32");
            println!("cargo:rustc-link-lib=dylib=gdi32");
            println!("cargo:rustc-link-lib=dylib=shell32");
        }
        _ => {}
    }
}
